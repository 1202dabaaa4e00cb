//! Per-container marquee configuration parsed from element attributes.
//!
//! Every field is optional in markup. Values that fail to parse are logged
//! and replaced by their default, so a typo in an attribute never stops the
//! ticker from running.

use crate::constants::{
    ATTR_MARQUEE_DIRECTION, ATTR_MARQUEE_PAUSE, ATTR_MARQUEE_SPACE, ATTR_MARQUEE_SPEED,
    ATTR_MARQUEE_START, DEFAULT_SPACE_BETWEEN, DEFAULT_SPEED, SPEED_ATTR_DIVISOR,
};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown marquee direction `{0}`")]
    UnknownDirection(String),
    #[error("attribute {attr} is not numeric: `{value}`")]
    NotNumeric { attr: &'static str, value: String },
}

/// Scroll axis of a marquee track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Top | Direction::Bottom => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        self.axis() == Axis::Vertical
    }

    /// +1 when the track moves toward the end of the axis (`right`/`bottom`).
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Right | Direction::Bottom => 1.0,
            Direction::Left | Direction::Top => -1.0,
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "top" => Ok(Direction::Top),
            "bottom" => Ok(Direction::Bottom),
            other => Err(ConfigError::UnknownDirection(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeConfig {
    pub direction: Direction,
    /// Pixels per second.
    pub speed: f64,
    /// Spacing from `data-fls-marquee-space`; computed item margin wins over it.
    pub configured_space: Option<f64>,
    pub start_offset_percent: f64,
    pub pause_on_hover: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Left,
            speed: DEFAULT_SPEED,
            configured_space: None,
            start_offset_percent: 0.0,
            pause_on_hover: false,
        }
    }
}

impl MarqueeConfig {
    /// Build a config from an attribute lookup (`name -> value`), falling back
    /// to defaults for anything missing or malformed.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let direction = match attr(ATTR_MARQUEE_DIRECTION) {
            Some(raw) => raw.parse().unwrap_or_else(|e: ConfigError| {
                log::debug!("[marquee] {e}, using left");
                Direction::Left
            }),
            None => Direction::Left,
        };

        let speed = match numeric_attr(&attr, ATTR_MARQUEE_SPEED) {
            Some(v) => sanitize_speed(v / SPEED_ATTR_DIVISOR),
            None => DEFAULT_SPEED,
        };

        Self {
            direction,
            speed,
            configured_space: numeric_attr(&attr, ATTR_MARQUEE_SPACE),
            start_offset_percent: numeric_attr(&attr, ATTR_MARQUEE_START).unwrap_or(0.0),
            pause_on_hover: attr(ATTR_MARQUEE_PAUSE).is_some(),
        }
    }
}

/// Speeds that are zero, negative or not finite would stall the animation.
#[inline]
pub fn sanitize_speed(speed: f64) -> f64 {
    if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        DEFAULT_SPEED
    }
}

fn numeric_attr(attr: &impl Fn(&str) -> Option<String>, name: &'static str) -> Option<f64> {
    let raw = attr(name)?;
    match parse_float_prefix(&raw) {
        Some(v) => Some(v),
        None => {
            let err = ConfigError::NotNumeric {
                attr: name,
                value: raw,
            };
            log::debug!("[marquee] {err}, using default");
            None
        }
    }
}

/// Parse the longest leading decimal number of `s`, the way browsers read
/// `"30px"` as `30`. Returns `None` when no digits lead the string.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut digits = 0;
    let mut seen_dot = false;
    let mut valid_end = 0;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                digits += 1;
                valid_end = end + 1;
            }
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }
    // Optional exponent, only taken when followed by at least one digit.
    let mut exp_end = valid_end;
    if matches!(bytes.get(valid_end), Some(b'e' | b'E')) {
        let mut i = valid_end + 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let start = i;
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
        if i > start {
            exp_end = i;
        }
    }
    s[..exp_end].parse().ok()
}

/// Resolve the inter-item spacing: authored item margin first, then the
/// configured attribute, then the default.
#[inline]
pub fn resolve_spacing(computed_margin: Option<f64>, configured: Option<f64>) -> f64 {
    match computed_margin {
        Some(m) if m != 0.0 && m.is_finite() => m,
        _ => configured
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_SPACE_BETWEEN),
    }
}

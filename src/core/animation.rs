use super::config::{sanitize_speed, Axis, Direction};
use crate::constants::ANIMATION_NAME_PREFIX;

/// Keyframe rule and timing for one build of a marquee track.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDescriptor {
    pub name: String,
    pub axis: Axis,
    /// Keyframe `0%` translation, as a percentage of the track's own extent.
    pub from_percent: f64,
    /// Keyframe `100%` translation in px, already signed.
    pub to_px: f64,
    pub duration_secs: f64,
}

/// Deterministic rule name: unique per instance and per build.
#[inline]
pub fn animation_name(instance_id: u64, build: u64) -> String {
    format!("{ANIMATION_NAME_PREFIX}-{instance_id}-{build}")
}

/// Describe the loop animation for a track whose seamless repeat unit is
/// `first_screen_visible_size` px long.
pub fn describe(
    name: String,
    direction: Direction,
    first_screen_visible_size: f64,
    start_offset_percent: f64,
    speed: f64,
    rtl: bool,
) -> AnimationDescriptor {
    let axis = direction.axis();
    let speed = sanitize_speed(speed);
    // At or below -100% the cycle would have no length left to travel.
    let start_offset_percent =
        if start_offset_percent.is_finite() && start_offset_percent > -100.0 {
            start_offset_percent
        } else {
            log::debug!("[marquee] start offset {start_offset_percent}% ignored");
            0.0
        };
    let mirrored = rtl && axis == Axis::Horizontal;
    // Subtract from zero so a zero offset never prints as `-0%`.
    let (from_percent, distance) = if mirrored {
        (0.0 - start_offset_percent, 0.0 - first_screen_visible_size)
    } else {
        (start_offset_percent, first_screen_visible_size)
    };
    let duration_secs = (first_screen_visible_size
        + start_offset_percent * first_screen_visible_size / 100.0)
        / speed;

    AnimationDescriptor {
        name,
        axis,
        from_percent,
        to_px: direction.sign() * distance,
        duration_secs,
    }
}

impl AnimationDescriptor {
    #[inline]
    fn translate_fn(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "translateX",
            Axis::Vertical => "translateY",
        }
    }

    pub fn keyframes_css(&self) -> String {
        let t = self.translate_fn();
        format!(
            "@keyframes {name} {{ 0% {{ transform: {t}({from}%); }} 100% {{ transform: {t}({to}px); }} }}",
            name = self.name,
            from = self.from_percent,
            to = self.to_px,
        )
    }

    /// Value for the track's `animation` shorthand.
    pub fn animation_value(&self) -> String {
        format!("{} {}s infinite linear", self.name, self.duration_secs)
    }
}

//! Duplication engine: decides how many clones of the authored items the
//! track needs so the loop never shows a gap, and how far one seamless
//! repeat of the animation has to travel.

use super::config::{Axis, Direction};
use super::renderer::Renderer;
use crate::constants::ATTR_MARQUEE_CLONE;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FillError {
    #[error("no positive extent to loop")]
    NothingToLoop,
    #[error("item {0} could not be cloned")]
    CloneFailed(usize),
}

/// Outcome of one duplication pass.
#[derive(Clone, Debug, PartialEq)]
pub struct DuplicationPlan {
    /// Extent of one pass over the authored items, spacing included.
    pub one_pass_extent: f64,
    /// `2 × container + one_pass_extent`; duplication stops once reached.
    pub target_extent: f64,
    /// Extent of the whole track after cloning.
    pub track_extent: f64,
    /// Distance travelled per animation cycle. Always a whole number of
    /// passes over the authored items.
    pub first_screen_visible_size: f64,
    /// Index into the authored items for each clone, in append order.
    pub clone_sources: Vec<usize>,
}

impl DuplicationPlan {
    #[inline]
    pub fn clone_count(&self) -> usize {
        self.clone_sources.len()
    }
}

/// Plan the clones for items of the given `sizes` (measured along the scroll
/// axis) inside a container of `container_extent`.
///
/// Returns `None` when there is nothing to loop: no items, or a one-pass
/// extent that is not strictly positive (which would never reach the target).
pub fn plan_duplicates(sizes: &[f64], spacing: f64, container_extent: f64) -> Option<DuplicationPlan> {
    if sizes.is_empty() {
        return None;
    }
    let one_pass_extent: f64 = sizes.iter().map(|s| s + spacing).sum();
    if !one_pass_extent.is_finite() || one_pass_extent <= 0.0 {
        return None;
    }
    let container_extent = if container_extent.is_finite() {
        container_extent.max(0.0)
    } else {
        0.0
    };

    let target_extent = container_extent * 2.0 + one_pass_extent;
    let mut track_extent = one_pass_extent;
    let mut visible = one_pass_extent;
    let mut counted = sizes.len();
    let mut clone_sources = Vec::new();
    let mut index = 0;

    while track_extent < target_extent {
        if index >= sizes.len() {
            index = 0;
        }
        let step = sizes[index] + spacing;
        clone_sources.push(index);
        track_extent += step;
        // Keep growing the visible run until it covers the container, then
        // only finish the current pass so the cycle ends on an item boundary.
        if visible < container_extent || counted % sizes.len() != 0 {
            counted += 1;
            visible += step;
        }
        index += 1;
    }

    Some(DuplicationPlan {
        one_pass_extent,
        target_extent,
        track_extent,
        first_screen_visible_size: visible,
        clone_sources,
    })
}

/// Inline styles for the track once it is filled.
pub fn track_base_styles(direction: Direction, first_screen_visible_size: f64) -> Vec<(&'static str, String)> {
    let mut styles = vec![
        ("display", "flex".to_string()),
        ("flex-wrap", "nowrap".to_string()),
    ];
    if direction.is_vertical() {
        styles.push(("flex-direction", "column".to_string()));
    }
    styles.push(("position", "relative".to_string()));
    styles.push(("will-change", "transform".to_string()));
    match direction {
        Direction::Bottom => styles.push(("top", format!("-{first_screen_visible_size}px"))),
        Direction::Right => styles.push((
            "inset-inline-start",
            format!("-{first_screen_visible_size}px"),
        )),
        Direction::Left | Direction::Top => {}
    }
    styles
}

#[inline]
pub fn trailing_margin_property(axis: Axis) -> &'static str {
    match axis {
        Axis::Horizontal => "margin-right",
        Axis::Vertical => "margin-bottom",
    }
}

/// Refill `track` from the cached `originals`, append the planned clones and
/// apply the base track styles.
///
/// Clones are only appended once every one of them was created, so a failed
/// clone leaves the track holding just the originals.
pub fn fill_track<R: Renderer>(
    renderer: &R,
    container: &R::Node,
    track: &R::Node,
    originals: &[R::Node],
    spacing: f64,
    direction: Direction,
) -> Result<DuplicationPlan, FillError> {
    let axis = direction.axis();
    let container_extent = renderer.measure(container, axis);

    renderer.clear_children(track);
    let margin = trailing_margin_property(axis);
    let spacing_px = format!("{spacing}px");
    for item in originals {
        renderer.append(track, item);
        renderer.set_style(item, margin, &spacing_px);
        if axis == Axis::Horizontal {
            renderer.set_style(item, "flex-shrink", "0");
        }
    }

    let sizes: Vec<f64> = originals.iter().map(|n| renderer.measure(n, axis)).collect();
    let Some(plan) = plan_duplicates(&sizes, spacing, container_extent) else {
        log::debug!("[marquee] nothing to duplicate (items={})", originals.len());
        return Err(FillError::NothingToLoop);
    };

    let mut clones = Vec::with_capacity(plan.clone_count());
    for &src in &plan.clone_sources {
        let clone = renderer
            .clone_deep(&originals[src])
            .ok_or(FillError::CloneFailed(src))?;
        renderer.set_attribute(&clone, ATTR_MARQUEE_CLONE, "");
        clones.push(clone);
    }
    for clone in &clones {
        renderer.append(track, clone);
    }
    renderer.replace_styles(
        track,
        &track_base_styles(direction, plan.first_screen_visible_size),
    );
    Ok(plan)
}

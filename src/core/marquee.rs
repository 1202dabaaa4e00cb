//! One marquee container and its layout pipeline.
//!
//! A pass recomputes spacing, refills the track, replaces the keyframe rule
//! and rewires listeners. Passes are re-entrant: resize and the start offset
//! reset both run a fresh pass over the same cached items.

use super::animation::{animation_name, describe, AnimationDescriptor};
use super::config::{resolve_spacing, MarqueeConfig};
use super::duplicate::{fill_track, trailing_margin_property, DuplicationPlan, FillError};
use super::layout::build_track;
use super::renderer::{HostEvent, ListenerScope, Renderer};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type SharedMarquee<R> = Rc<RefCell<MarqueeInstance<R>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    /// Track built and items cached, no pass yet.
    Built,
    Animating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    Disconnected,
    ZeroExtent,
    /// The host could not copy an item.
    CloneFailed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PassOutcome {
    Skipped(SkipReason),
    Animated,
}

pub struct MarqueeInstance<R: Renderer> {
    id: u64,
    renderer: Rc<R>,
    container: R::Node,
    config: MarqueeConfig,
    state: LifecycleState,
    track: Option<R::Node>,
    originals: Vec<R::Node>,
    start_offset_percent: f64,
    spacing: f64,
    builds: u64,
    plan: Option<DuplicationPlan>,
    animation: Option<AnimationDescriptor>,
    listeners: ListenerScope<R>,
}

impl<R: Renderer + 'static> MarqueeInstance<R> {
    pub fn new(id: u64, renderer: Rc<R>, container: R::Node, config: MarqueeConfig) -> Self {
        let start_offset_percent = config.start_offset_percent;
        let spacing = config
            .configured_space
            .unwrap_or(crate::constants::DEFAULT_SPACE_BETWEEN);
        Self {
            id,
            listeners: ListenerScope::new(renderer.clone()),
            renderer,
            container,
            config,
            state: LifecycleState::Uninitialized,
            track: None,
            originals: Vec::new(),
            start_offset_percent,
            spacing,
            builds: 0,
            plan: None,
            animation: None,
        }
    }

    pub fn shared(self) -> SharedMarquee<R> {
        Rc::new(RefCell::new(self))
    }

    pub fn id(&self) -> u64 {
        self.id
    }
    pub fn state(&self) -> LifecycleState {
        self.state
    }
    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }
    pub fn track(&self) -> Option<&R::Node> {
        self.track.as_ref()
    }
    pub fn originals(&self) -> &[R::Node] {
        &self.originals
    }
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
    pub fn start_offset_percent(&self) -> f64 {
        self.start_offset_percent
    }
    pub fn plan(&self) -> Option<&DuplicationPlan> {
        self.plan.as_ref()
    }
    pub fn animation(&self) -> Option<&AnimationDescriptor> {
        self.animation.as_ref()
    }
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Wrap the container's items in a track, once. Later calls are no-ops.
    pub fn build(&mut self) -> bool {
        if self.state != LifecycleState::Uninitialized {
            return self.track.is_some();
        }
        match build_track(self.renderer.as_ref(), &self.container) {
            Some(layout) => {
                self.track = Some(layout.track);
                self.originals = layout.originals;
                self.state = LifecycleState::Built;
                true
            }
            None => false,
        }
    }

    /// Re-read the authored margin of the first item with our inline margin
    /// removed, and resolve the spacing from it.
    fn correct_spacing(&mut self) {
        let axis = self.config.direction.axis();
        let property = trailing_margin_property(axis);
        for item in &self.originals {
            self.renderer.remove_style(item, property);
        }
        let computed = self
            .originals
            .first()
            .and_then(|first| self.renderer.trailing_margin(first, axis));
        self.spacing = resolve_spacing(computed, self.config.configured_space);
    }

    fn replace_animation(&mut self, fsvs: f64) {
        let Some(track) = self.track.clone() else {
            return;
        };
        if let Some(prev) = self.animation.take() {
            self.renderer.remove_rule(&prev.name);
        }
        self.builds += 1;
        let desc = describe(
            animation_name(self.id, self.builds),
            self.config.direction,
            fsvs,
            self.start_offset_percent,
            self.config.speed,
            self.renderer.is_rtl(),
        );
        self.renderer.insert_rule(&desc.name, &desc.keyframes_css());
        self.renderer
            .set_style(&track, "animation", &desc.animation_value());
        self.animation = Some(desc);
    }
}

/// Run one full pass on a shared instance: spacing, duplication, animation
/// and listeners. Safe to call from the instance's own event handlers.
pub fn relayout<R: Renderer + 'static>(instance: &SharedMarquee<R>) -> PassOutcome {
    let weak = Rc::downgrade(instance);
    let mut inst = instance.borrow_mut();

    if !inst.renderer.is_connected(&inst.container) {
        log::debug!("[marquee] #{} detached, skipping pass", inst.id);
        return PassOutcome::Skipped(SkipReason::Disconnected);
    }
    if !inst.build() {
        return PassOutcome::Skipped(SkipReason::Empty);
    }
    let Some(track) = inst.track.clone() else {
        return PassOutcome::Skipped(SkipReason::Empty);
    };

    inst.listeners.clear();
    inst.correct_spacing();
    let plan = fill_track(
        inst.renderer.as_ref(),
        &inst.container,
        &track,
        &inst.originals,
        inst.spacing,
        inst.config.direction,
    );
    let plan = match plan {
        Ok(plan) => plan,
        Err(err) => {
            if let Some(prev) = inst.animation.take() {
                inst.renderer.remove_rule(&prev.name);
            }
            inst.plan = None;
            return PassOutcome::Skipped(match err {
                FillError::NothingToLoop => SkipReason::ZeroExtent,
                FillError::CloneFailed(_) => {
                    log::warn!("[marquee] #{} {err}", inst.id);
                    SkipReason::CloneFailed
                }
            });
        }
    };

    let fsvs = plan.first_screen_visible_size;
    log::debug!(
        "[marquee] #{} clones={} track={} loop={}",
        inst.id,
        plan.clone_count(),
        plan.track_extent,
        fsvs
    );
    inst.plan = Some(plan);
    inst.replace_animation(fsvs);
    wire_events(&mut inst, &track, weak);
    inst.state = LifecycleState::Animating;
    PassOutcome::Animated
}

fn wire_events<R: Renderer + 'static>(
    inst: &mut MarqueeInstance<R>,
    track: &R::Node,
    weak: Weak<RefCell<MarqueeInstance<R>>>,
) {
    if inst.start_offset_percent != 0.0 {
        inst.listeners.add(
            track,
            HostEvent::AnimationIteration,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    reset_start_offset(&shared);
                }
            }),
        );
    }

    if inst.config.pause_on_hover {
        for (event, state) in [
            (HostEvent::PointerEnter, "paused"),
            (HostEvent::PointerLeave, "running"),
        ] {
            let renderer = inst.renderer.clone();
            let target = track.clone();
            inst.listeners.add(
                track,
                event,
                Box::new(move || renderer.set_style(&target, "animation-play-state", state)),
            );
        }
    }
}

/// First loop finished: drop the start offset and rebuild with the canonical
/// zero-offset animation.
fn reset_start_offset<R: Renderer + 'static>(instance: &SharedMarquee<R>) {
    {
        let mut inst = instance.borrow_mut();
        inst.start_offset_percent = 0.0;
        inst.listeners.remove(HostEvent::AnimationIteration);
    }
    relayout(instance);
}

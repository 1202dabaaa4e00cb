use super::marquee::{relayout, PassOutcome, SharedMarquee};
use super::renderer::Renderer;

/// Trailing-edge debounce keyed by tickets: every trigger supersedes the
/// ones before it, and only the newest ticket fires.
#[derive(Debug, Default)]
pub struct Debouncer {
    latest: u64,
    fired: bool,
}

impl Debouncer {
    pub fn trigger(&mut self) -> u64 {
        self.latest += 1;
        self.fired = false;
        self.latest
    }

    /// True exactly once, for the most recent ticket.
    pub fn fire(&mut self, ticket: u64) -> bool {
        if ticket != self.latest || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Remembers the last viewport width so that resize events which do not
/// change it are ignored.
#[derive(Debug, Default)]
pub struct WidthWatcher {
    prev: Option<f64>,
}

impl WidthWatcher {
    pub fn changed(&mut self, width: f64) -> bool {
        if self.prev == Some(width) {
            return false;
        }
        self.prev = Some(width);
        true
    }
}

/// Every marquee on the page, relaid out together when the width changes.
pub struct MarqueeRegistry<R: Renderer> {
    instances: Vec<SharedMarquee<R>>,
    width: WidthWatcher,
}

impl<R: Renderer> Default for MarqueeRegistry<R> {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
            width: WidthWatcher::default(),
        }
    }
}

impl<R: Renderer + 'static> MarqueeRegistry<R> {
    /// Register an instance and lay it out immediately.
    pub fn register(&mut self, instance: SharedMarquee<R>) -> PassOutcome {
        let outcome = relayout(&instance);
        self.instances.push(instance);
        outcome
    }

    /// Record the width the instances were first laid out at, so the
    /// first resize to the same width does not run another pass.
    pub fn prime_width(&mut self, viewport_width: f64) {
        self.width.changed(viewport_width);
    }

    pub fn instances(&self) -> &[SharedMarquee<R>] {
        &self.instances
    }

    /// Relayout every instance if `viewport_width` differs from the last
    /// observed width. Returns the number of passes run.
    pub fn on_viewport_width(&mut self, viewport_width: f64) -> usize {
        if !self.width.changed(viewport_width) {
            return 0;
        }
        log::debug!(
            "[resize] width={} relayout {} marquee(s)",
            viewport_width,
            self.instances.len()
        );
        for instance in &self.instances {
            relayout(instance);
        }
        self.instances.len()
    }
}

//! Page scroll lock state.
//!
//! The controller only decides; the browser glue applies the attribute and
//! padding changes. A lock or unlock makes the controller busy for its delay,
//! during which further requests are ignored.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockTransition {
    /// Lock attribute must be set now.
    Locked,
    /// Lock attribute and padding must be cleared after `after`.
    UnlockScheduled { after: Duration },
    /// Guard busy; nothing to do.
    Ignored,
}

#[derive(Debug, Default)]
pub struct ScrollLock {
    locked: bool,
    busy_until: Option<Instant>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn is_ready(&self, now: Instant) -> bool {
        self.busy_until.map_or(true, |until| now >= until)
    }

    pub fn lock(&mut self, now: Instant, delay: Duration) -> LockTransition {
        if !self.is_ready(now) {
            return LockTransition::Ignored;
        }
        self.locked = true;
        self.busy_until = Some(now + delay);
        LockTransition::Locked
    }

    pub fn unlock(&mut self, now: Instant, delay: Duration) -> LockTransition {
        if !self.is_ready(now) {
            return LockTransition::Ignored;
        }
        self.locked = false;
        self.busy_until = Some(now + delay);
        LockTransition::UnlockScheduled { after: delay }
    }

    /// Unlock when locked, lock otherwise; both use the same `delay`.
    pub fn toggle(&mut self, now: Instant, delay: Duration) -> LockTransition {
        if self.locked {
            self.unlock(now, delay)
        } else {
            self.lock(now, delay)
        }
    }
}

//! Combined-button hold gesture.
//!
//! Holding both buttons for the configured threshold requests a reboot. The
//! request fires once per hold and re-arms only after a release.

use core::time::Duration;

/// Tracks how long both buttons have been held together.
///
/// `hold_start` is `None` whenever at least one button is released.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct HoldTracker {
    hold_start: Option<Duration>,
    fired: bool,
}

impl HoldTracker {
    pub const fn new() -> Self {
        Self {
            hold_start: None,
            fired: false,
        }
    }

    /// Feed the combined button level for this tick.
    ///
    /// Returns `true` on exactly one tick per qualifying hold: the first tick
    /// on which the hold has lasted at least `threshold`.
    pub fn update(
        &mut self,
        both_pressed: bool,
        now: Duration,
        threshold: Duration,
    ) -> bool {
        if !both_pressed {
            self.hold_start = None;
            self.fired = false;
            return false;
        }

        let start = *self.hold_start.get_or_insert(now);
        if !self.fired && now.saturating_sub(start) >= threshold {
            self.fired = true;
            return true;
        }
        false
    }

    #[cfg(test)]
    const fn hold_start(&self) -> Option<Duration> { self.hold_start }
}

//! Wall-clock ticker for the simulator.
//!
//! The engine only sees `Duration`s since start; `Instant` lives here because
//! it is not available to the `no_std` common crate.

use std::thread;
use std::time::{Duration, Instant};

use statpanel_common::Ticker;

/// Monotonic clock anchored at construction.
pub struct StdTicker {
    start: Instant,
}

impl StdTicker {
    pub fn new() -> Self { Self { start: Instant::now() } }
}

impl Ticker for StdTicker {
    fn now(&self) -> Duration { self.start.elapsed() }

    fn sleep(
        &mut self,
        duration: Duration,
    ) {
        thread::sleep(duration);
    }
}

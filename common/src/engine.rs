//! Fixed-period main loop.
//!
//! [`Panel`] owns all persistent state (buttons, hold gesture, mode and
//! animation) and talks to the outside world only through the collaborator
//! traits below. Time is passed in as a monotonic [`Duration`] since an
//! arbitrary epoch, so tests can drive the loop with synthetic clocks.
//!
//! Each tick:
//! 1. sample and debounce both buttons, apply B (display) and A (mode) presses
//! 2. check the reboot hold; if it fires, show the reboot frame, run the
//!    reboot action and end the tick
//! 3. display off: present a blank frame and end the tick
//! 4. fetch stats for the current mode (none for globe / standby)
//! 5. advance the animation
//! 6. compose the frame
//! 7. present it
//!
//! [`Panel::step`] adds the sleep for the remainder of the period.
//! No collaborator failure ends the loop.

use core::time::Duration;

use embedded_graphics::geometry::Size;
use log::{error, info, warn};

use crate::animations::{AnimationEngine, AnimationState, SpriteGeometry};
use crate::config::PanelConfig;
use crate::error::{ConfigError, PanelError};
use crate::frame::Frame;
use crate::screens::{FrameContext, compose, compose_blank, compose_reboot};
use crate::state::{ButtonId, Debouncer, DisplayMode, Edge, HoldTracker, ModeStateMachine};
use crate::stats::{PiholeStats, StatSnapshot, StatSource, SystemStats};

// =============================================================================
// Collaborators
// =============================================================================

/// Raw button levels. Must not block.
pub trait InputSource {
    /// `true` while `button` is physically pressed.
    fn read(
        &mut self,
        button: ButtonId,
    ) -> bool;
}

/// Stat sources. Each call must bound its own blocking time.
pub trait StatsCollector {
    fn fetch_pihole(&mut self) -> Result<PiholeStats, PanelError>;
    fn fetch_system(&mut self) -> Result<SystemStats, PanelError>;
}

/// The physical display.
pub trait Presenter {
    /// Canvas size frames are composed for.
    fn size(&self) -> Size;

    fn present(
        &mut self,
        frame: &Frame,
    ) -> Result<(), PanelError>;
}

/// Action run when the reboot hold fires.
pub trait RebootAction {
    fn execute(&mut self) -> Result<(), PanelError>;
}

/// Monotonic clock plus sleep.
pub trait Ticker {
    fn now(&self) -> Duration;

    fn sleep(
        &mut self,
        duration: Duration,
    );
}

// =============================================================================
// Main Loop
// =============================================================================

/// What a tick ended up doing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// A frame for this mode was presented.
    Presented(DisplayMode),
    /// Display is off; a blank frame was presented.
    Blank,
    /// The reboot hold fired this tick.
    Rebooting,
    /// The frame could not be presented.
    Dropped,
}

/// The panel control engine.
pub struct Panel<I, S, P, R> {
    config: PanelConfig,
    debouncer: Debouncer,
    hold: HoldTracker,
    modes: ModeStateMachine,
    animator: AnimationEngine,
    input: I,
    stats: S,
    presenter: P,
    reboot: R,
}

impl<I, S, P, R> Panel<I, S, P, R>
where
    I: InputSource,
    S: StatsCollector,
    P: Presenter,
    R: RebootAction,
{
    /// Validate `config` and build the engine at time `now`.
    ///
    /// `sprite` is the loaded sheet's geometry, or `None` if it failed to load.
    pub fn new(
        config: PanelConfig,
        sprite: Option<SpriteGeometry>,
        input: I,
        stats: S,
        presenter: P,
        reboot: R,
        now: Duration,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if sprite.is_none() {
            warn!("globe sprite sheet unavailable, globe page will show a notice");
        }
        let modes = ModeStateMachine::new(&config, now);
        info!("panel starting in {} mode ({:?})", modes.mode().label(), config.strategy);
        Ok(Self {
            config,
            debouncer: Debouncer::new(),
            hold: HoldTracker::new(),
            modes,
            animator: AnimationEngine::new(&config, sprite),
            input,
            stats,
            presenter,
            reboot,
        })
    }

    /// Run one iteration at time `now`, without sleeping.
    pub fn tick(
        &mut self,
        now: Duration,
    ) -> TickOutcome {
        let a = self.debouncer.update(ButtonId::A, self.input.read(ButtonId::A));
        let b = self.debouncer.update(ButtonId::B, self.input.read(ButtonId::B));

        if b == Edge::Pressed {
            let on = self.modes.toggle_display(now);
            info!("display {}", if on { "on" } else { "off" });
        }

        // Mode is frozen while the display is off.
        let mut entered = false;
        if a == Edge::Pressed && self.modes.display_on() {
            let mode = self.modes.on_button_a(now);
            entered = true;
            info!("mode -> {}", mode.label());
        }

        if self.hold.update(self.debouncer.both_pressed(), now, self.config.hold_threshold) {
            self.reboot_now();
            return TickOutcome::Rebooting;
        }

        if !self.modes.display_on() {
            let frame = compose_blank(self.presenter.size());
            return if self.present(&frame) {
                TickOutcome::Blank
            } else {
                TickOutcome::Dropped
            };
        }

        let snapshot = self.fetch_stats(self.modes.mode());

        // A mode entered this tick shows its first frame before advancing.
        if !entered {
            let mode = self.modes.mode();
            if let Some(next) = self.animator.advance(mode, self.modes.animation_mut(), now) {
                if next == DisplayMode::Static {
                    info!("entrance complete");
                }
                self.modes.apply_animation(next);
            }
        }

        let mode = self.modes.mode();
        let frame = compose(&FrameContext {
            mode,
            animation: self.modes.animation(),
            stats: &snapshot,
            canvas: self.presenter.size(),
            sprite: self.animator.sprite(),
            config: &self.config,
        });
        if frame.overflowed() {
            warn!("{} frame overflowed, some primitives were dropped", mode.label());
        }

        if self.present(&frame) {
            TickOutcome::Presented(mode)
        } else {
            TickOutcome::Dropped
        }
    }

    /// One tick plus the sleep for the rest of the period.
    ///
    /// A tick that runs past its period is logged and the sleep is skipped.
    pub fn step<T: Ticker>(
        &mut self,
        ticker: &mut T,
    ) -> TickOutcome {
        let start = ticker.now();
        let outcome = self.tick(start);
        let elapsed = ticker.now().saturating_sub(start);

        match self.config.tick_period.checked_sub(elapsed) {
            Some(remaining) => ticker.sleep(remaining),
            None => warn!(
                "tick overran: {} ms (period {} ms)",
                elapsed.as_millis(),
                self.config.tick_period.as_millis()
            ),
        }
        outcome
    }

    /// Run forever.
    pub fn run<T: Ticker>(
        &mut self,
        ticker: &mut T,
    ) -> ! {
        loop {
            self.step(ticker);
        }
    }

    fn reboot_now(&mut self) {
        info!("reboot hold held for {:?}, rebooting", self.config.hold_threshold);
        let frame = compose_reboot(self.presenter.size());
        self.present(&frame);
        if let Err(err) = self.reboot.execute() {
            error!("{err}");
        }
    }

    fn fetch_stats(
        &mut self,
        mode: DisplayMode,
    ) -> StatSnapshot {
        let Some(source) = mode.stat_source() else {
            return StatSnapshot::None;
        };
        let fetched = match source {
            StatSource::Pihole => self.stats.fetch_pihole().map(StatSnapshot::Pihole),
            StatSource::System => self.stats.fetch_system().map(StatSnapshot::System),
        };
        fetched.unwrap_or_else(|err| {
            warn!("{err}, showing placeholders");
            StatSnapshot::unavailable(source)
        })
    }

    /// Hand `frame` to the presenter; `false` if it was dropped.
    fn present(
        &mut self,
        frame: &Frame,
    ) -> bool {
        match self.presenter.present(frame) {
            Ok(()) => true,
            Err(err) => {
                warn!("{err}, frame skipped");
                false
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn mode(&self) -> DisplayMode { self.modes.mode() }

    #[inline]
    pub const fn display_on(&self) -> bool { self.modes.display_on() }

    #[inline]
    pub const fn animation(&self) -> &AnimationState { self.modes.animation() }

    #[inline]
    pub fn input_mut(&mut self) -> &mut I { &mut self.input }

    #[inline]
    pub const fn stats(&self) -> &S { &self.stats }

    #[inline]
    pub fn stats_mut(&mut self) -> &mut S { &mut self.stats }

    #[inline]
    pub const fn presenter(&self) -> &P { &self.presenter }

    #[inline]
    pub fn presenter_mut(&mut self) -> &mut P { &mut self.presenter }

    #[inline]
    pub const fn reboot_action(&self) -> &R { &self.reboot }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    struct Idle;

    impl InputSource for Idle {
        fn read(
            &mut self,
            _button: ButtonId,
        ) -> bool {
            false
        }
    }

    struct NoStats;

    impl StatsCollector for NoStats {
        fn fetch_pihole(&mut self) -> Result<PiholeStats, PanelError> { Err(PanelError::Timeout) }

        fn fetch_system(&mut self) -> Result<SystemStats, PanelError> { Err(PanelError::Timeout) }
    }

    struct Sink;

    impl Presenter for Sink {
        fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }

        fn present(
            &mut self,
            _frame: &Frame,
        ) -> Result<(), PanelError> {
            Ok(())
        }
    }

    struct NoReboot;

    impl RebootAction for NoReboot {
        fn execute(&mut self) -> Result<(), PanelError> { Err(PanelError::Reboot) }
    }

    /// Clock that replays scripted readings and records sleeps.
    struct ScriptedClock {
        readings: RefCell<VecDeque<Duration>>,
        slept: Vec<Duration>,
    }

    impl ScriptedClock {
        fn new(readings: &[u64]) -> Self {
            Self {
                readings: RefCell::new(readings.iter().map(|ms| Duration::from_millis(*ms)).collect()),
                slept: Vec::new(),
            }
        }
    }

    impl Ticker for ScriptedClock {
        fn now(&self) -> Duration { self.readings.borrow_mut().pop_front().unwrap_or_default() }

        fn sleep(
            &mut self,
            duration: Duration,
        ) {
            self.slept.push(duration);
        }
    }

    fn panel(config: PanelConfig) -> Panel<Idle, NoStats, Sink, NoReboot> {
        Panel::new(config, None, Idle, NoStats, Sink, NoReboot, Duration::ZERO).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PanelConfig::DEFAULT.with_tick_period(Duration::ZERO);
        let result = Panel::new(config, None, Idle, NoStats, Sink, NoReboot, Duration::ZERO);
        assert_eq!(result.err(), Some(ConfigError::ZeroTickPeriod));
    }

    #[test]
    fn test_step_sleeps_remainder() {
        let mut panel = panel(PanelConfig::DEFAULT);
        let mut clock = ScriptedClock::new(&[0, 30]);
        let outcome = panel.step(&mut clock);
        assert_eq!(outcome, TickOutcome::Presented(DisplayMode::Pihole));
        assert_eq!(clock.slept, vec![Duration::from_millis(70)]);
    }

    #[test]
    fn test_step_overrun_skips_sleep() {
        let mut panel = panel(PanelConfig::DEFAULT);
        let mut clock = ScriptedClock::new(&[1000, 1150]);
        panel.step(&mut clock);
        assert!(clock.slept.is_empty());

        let mut clock = ScriptedClock::new(&[2000, 2100]);
        panel.step(&mut clock);
        assert_eq!(clock.slept, vec![Duration::ZERO]);
    }

    #[test]
    fn test_stat_failure_still_presents() {
        let mut panel = panel(PanelConfig::DEFAULT);
        assert_eq!(panel.tick(Duration::ZERO), TickOutcome::Presented(DisplayMode::Pihole));
    }
}

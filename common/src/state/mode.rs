//! Display modes and the transitions between them.

use core::time::Duration;

use crate::animations::AnimationState;
use crate::config::{ModeStrategy, PanelConfig};
use crate::stats::StatSource;

/// What the panel is showing.
///
/// `Pihole`, `System` and `Globe` are the pages of the page-cycle strategy.
/// `Standby`, `Animating` and `Static` belong to the entrance strategy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayMode {
    Pihole,
    System,
    Globe,
    Standby,
    /// Entrance animation in progress; carries the current frame index.
    Animating(u8),
    Static,
}

impl DisplayMode {
    /// Whether this mode can appear in a page cycle.
    #[inline]
    pub const fn is_page(self) -> bool { matches!(self, Self::Pihole | Self::System | Self::Globe) }

    /// Short lowercase name used in log messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pihole => "pihole",
            Self::System => "system",
            Self::Globe => "globe",
            Self::Standby => "standby",
            Self::Animating(_) => "animating",
            Self::Static => "static",
        }
    }

    /// Stats this mode needs fetched each tick, if any.
    pub const fn stat_source(self) -> Option<StatSource> {
        match self {
            Self::Pihole | Self::Animating(_) | Self::Static => Some(StatSource::Pihole),
            Self::System => Some(StatSource::System),
            Self::Globe | Self::Standby => None,
        }
    }

    /// Whether entering this mode restarts the animation counter.
    #[inline]
    const fn restarts_animation(self) -> bool { matches!(self, Self::Globe | Self::Animating(_)) }
}

/// Owns the current mode, the master display flag and the animation sub-state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ModeStateMachine {
    mode: DisplayMode,
    display_on: bool,
    strategy: ModeStrategy,
    cycle: &'static [DisplayMode],
    animation: AnimationState,
}

impl ModeStateMachine {
    /// Start in the first page of the cycle, or in standby for the entrance strategy.
    pub fn new(
        config: &PanelConfig,
        now: Duration,
    ) -> Self {
        let mode = match config.strategy {
            ModeStrategy::PageCycle => config.cycle_order.first().copied().unwrap_or(DisplayMode::Pihole),
            ModeStrategy::Entrance => DisplayMode::Standby,
        };
        Self {
            mode,
            display_on: true,
            strategy: config.strategy,
            cycle: config.cycle_order,
            animation: AnimationState::new(now),
        }
    }

    #[inline]
    pub const fn mode(&self) -> DisplayMode { self.mode }

    #[inline]
    pub const fn display_on(&self) -> bool { self.display_on }

    #[inline]
    pub const fn strategy(&self) -> ModeStrategy { self.strategy }

    #[inline]
    pub const fn animation(&self) -> &AnimationState { &self.animation }

    #[inline]
    pub fn animation_mut(&mut self) -> &mut AnimationState { &mut self.animation }

    /// Mode that a button-A press would move to from the current one.
    pub fn next_mode(&self) -> DisplayMode {
        match self.strategy {
            ModeStrategy::Entrance => DisplayMode::Animating(0),
            ModeStrategy::PageCycle => {
                let Some(first) = self.cycle.first().copied() else {
                    return self.mode;
                };
                match self.cycle.iter().position(|mode| *mode == self.mode) {
                    Some(index) => self.cycle[(index + 1) % self.cycle.len()],
                    None => first,
                }
            }
        }
    }

    /// Handle a button-A press. Returns the mode entered.
    pub fn on_button_a(
        &mut self,
        now: Duration,
    ) -> DisplayMode {
        let next = self.next_mode();
        self.enter(next, now);
        next
    }

    /// Handle a button-B press. Returns the new `display_on` value.
    ///
    /// Mode and animation frame are left untouched. When the display comes
    /// back on, the animation clock is rebased so the globe does not jump
    /// forward by the time spent off.
    pub fn toggle_display(
        &mut self,
        now: Duration,
    ) -> bool {
        self.display_on = !self.display_on;
        if self.display_on {
            self.animation.last_advance = now;
        }
        self.display_on
    }

    /// Apply a transition requested by the animation engine.
    pub fn apply_animation(
        &mut self,
        mode: DisplayMode,
    ) {
        self.mode = mode;
    }

    fn enter(
        &mut self,
        mode: DisplayMode,
        now: Duration,
    ) {
        if mode.restarts_animation() {
            self.animation.reset(now);
        }
        self.mode = mode;
    }
}

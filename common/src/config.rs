//! Panel configuration: the runtime record plus compile-time layout constants.
//!
//! [`PanelConfig`] is the immutable record handed to the engine at startup.
//! Everything that shapes the picture (margins, font sizes, row pitch) is a
//! `const`, so layout math folds away at compile time and every page shares the
//! same grid.

use core::time::Duration;

use crate::error::ConfigError;
use crate::state::DisplayMode;

// =============================================================================
// Display Configuration
// =============================================================================

/// Default canvas width (ST7789 1.14" panel in landscape).
pub const SCREEN_WIDTH: u32 = 240;

/// Default canvas height.
pub const SCREEN_HEIGHT: u32 = 135;

// =============================================================================
// Layout Constants
// =============================================================================

/// Header font height in pixels.
pub const HEADER_FONT_PX: u8 = 12;

/// Data row font height in pixels.
pub const DATA_FONT_PX: u8 = 14;

/// Font height for full-screen messages (reboot, standby prompt).
pub const OVERLAY_FONT_PX: u8 = 22;

/// Smallest font height the entrance animation will shrink text to.
pub const MIN_FONT_PX: u8 = 6;

/// Left edge of header and data rows.
pub const MARGIN_X: i32 = 8;

/// Top of the header text.
pub const HEADER_Y: i32 = 4;

/// Y coordinate of the divider under the header.
pub const DIVIDER_Y: i32 = 22;

/// Horizontal inset of the divider from both canvas edges.
pub const DIVIDER_INSET: i32 = 5;

/// Top of the first data row.
pub const ROW_START_Y: i32 = 28;

/// Vertical distance between data rows.
pub const ROW_PITCH: i32 = 28;

/// Length of each corner accent stroke.
pub const ACCENT_LEN: i32 = 20;

/// Stroke width of the corner accents.
pub const ACCENT_WIDTH: u32 = 2;

/// Spacing of the background grid.
pub const GRID_PITCH: usize = 30;

/// Most grid lines drawn along either axis. Larger canvases widen the pitch
/// instead of adding lines.
pub const GRID_MAX_LINES: u32 = 12;

/// Position of the "sprite not found" message (y is half the canvas height).
pub const SPRITE_MISSING_X: i32 = 20;

// =============================================================================
// Animation Constants
// =============================================================================

/// Scale of the entrance layout on its first frame.
pub const ENTRANCE_MIN_SCALE: f32 = 0.3;

/// Corner accents appear once the entrance scale reaches this value.
pub const ACCENT_MIN_SCALE: f32 = 0.9;

/// Fraction of the limiting canvas dimension the globe tile fills.
pub const GLOBE_FILL_RATIO: f32 = 0.8;

/// Globe sprite sheet: frame width in pixels.
pub const GLOBE_FRAME_WIDTH: u32 = 48;

/// Globe sprite sheet: frame height in pixels.
pub const GLOBE_FRAME_HEIGHT: u32 = 48;

/// Globe sprite sheet: frames per row.
pub const GLOBE_FRAMES_PER_ROW: u32 = 10;

/// Globe sprite sheet: total frame count.
pub const GLOBE_TOTAL_FRAMES: u32 = 84;

// =============================================================================
// Runtime Configuration Record
// =============================================================================

/// Which mode family the engine runs.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ModeStrategy {
    /// Button A cycles through the pages in [`PanelConfig::cycle_order`].
    #[default]
    PageCycle,
    /// Single page that grows in from a standby screen on each A press.
    Entrance,
}

/// Page cycle used when nothing else is configured.
pub const DEFAULT_CYCLE: &[DisplayMode] = &[DisplayMode::Pihole, DisplayMode::System, DisplayMode::Globe];

/// Immutable engine configuration supplied at startup.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PanelConfig {
    /// Main loop period.
    pub tick_period: Duration,
    /// How long both buttons must be held before a reboot is requested.
    pub hold_threshold: Duration,
    /// Minimum time between globe animation frames.
    pub frame_delay: Duration,
    /// Number of ticks the entrance animation takes to reach full size.
    pub entrance_frames: u8,
    /// CPU temperature above which the reading is drawn as a warning.
    pub temp_warning_c: f32,
    /// Order in which button A cycles pages.
    pub cycle_order: &'static [DisplayMode],
    /// Mode family to run.
    pub strategy: ModeStrategy,
}

impl PanelConfig {
    /// 100 ms ticks, 2 s reboot hold, 10 FPS globe, 20-frame entrance, 60 C warning.
    pub const DEFAULT: Self = Self {
        tick_period: Duration::from_millis(100),
        hold_threshold: Duration::from_secs(2),
        frame_delay: Duration::from_millis(100),
        entrance_frames: 20,
        temp_warning_c: 60.0,
        cycle_order: DEFAULT_CYCLE,
        strategy: ModeStrategy::PageCycle,
    };

    pub const fn with_strategy(
        mut self,
        strategy: ModeStrategy,
    ) -> Self {
        self.strategy = strategy;
        self
    }

    pub const fn with_cycle_order(
        mut self,
        cycle_order: &'static [DisplayMode],
    ) -> Self {
        self.cycle_order = cycle_order;
        self
    }

    pub const fn with_tick_period(
        mut self,
        tick_period: Duration,
    ) -> Self {
        self.tick_period = tick_period;
        self
    }

    pub const fn with_hold_threshold(
        mut self,
        hold_threshold: Duration,
    ) -> Self {
        self.hold_threshold = hold_threshold;
        self
    }

    pub const fn with_frame_delay(
        mut self,
        frame_delay: Duration,
    ) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    pub const fn with_entrance_frames(
        mut self,
        entrance_frames: u8,
    ) -> Self {
        self.entrance_frames = entrance_frames;
        self
    }

    pub const fn with_temp_warning(
        mut self,
        temp_warning_c: f32,
    ) -> Self {
        self.temp_warning_c = temp_warning_c;
        self
    }

    /// Check the record for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period.is_zero() {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.frame_delay.is_zero() {
            return Err(ConfigError::ZeroFrameDelay);
        }
        if self.entrance_frames == 0 {
            return Err(ConfigError::ZeroAnimationFrames);
        }
        if self.hold_threshold < self.tick_period {
            return Err(ConfigError::HoldShorterThanTick);
        }
        if self.strategy == ModeStrategy::PageCycle {
            if self.cycle_order.is_empty() {
                return Err(ConfigError::EmptyCycle);
            }
            if let Some(mode) = self.cycle_order.iter().find(|mode| !mode.is_page()) {
                return Err(ConfigError::ForeignCycleMode(*mode));
            }
        }
        Ok(())
    }
}

impl Default for PanelConfig {
    fn default() -> Self { Self::DEFAULT }
}

// Compile-time layout sanity: rows must sit below the divider, and the last
// row must fit on the default canvas.
const _: () = assert!(DIVIDER_Y < ROW_START_Y);
const _: () = assert!(ROW_START_Y + 3 * ROW_PITCH + DATA_FONT_PX as i32 <= SCREEN_HEIGHT as i32);
const _: () = assert!(ENTRANCE_MIN_SCALE < ACCENT_MIN_SCALE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(PanelConfig::DEFAULT.validate(), Ok(()));
        assert_eq!(PanelConfig::default(), PanelConfig::DEFAULT);
    }

    #[test]
    fn test_default_timing() {
        let config = PanelConfig::DEFAULT;
        assert_eq!(config.tick_period, Duration::from_millis(100));
        assert_eq!(config.hold_threshold, Duration::from_secs(2));
        assert_eq!(config.frame_delay, Duration::from_millis(100));
        assert_eq!(config.entrance_frames, 20);
    }

    #[test]
    fn test_zero_values_rejected() {
        let config = PanelConfig::DEFAULT.with_tick_period(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickPeriod));

        let config = PanelConfig::DEFAULT.with_frame_delay(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameDelay));

        let config = PanelConfig::DEFAULT.with_entrance_frames(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroAnimationFrames));
    }

    #[test]
    fn test_hold_must_cover_a_tick() {
        let config = PanelConfig::DEFAULT.with_hold_threshold(Duration::from_millis(50));
        assert_eq!(config.validate(), Err(ConfigError::HoldShorterThanTick));
    }

    #[test]
    fn test_cycle_order_checks() {
        let config = PanelConfig::DEFAULT.with_cycle_order(&[]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyCycle));

        let config = PanelConfig::DEFAULT.with_cycle_order(&[DisplayMode::Pihole, DisplayMode::Standby]);
        assert_eq!(config.validate(), Err(ConfigError::ForeignCycleMode(DisplayMode::Standby)));
    }

    #[test]
    fn test_entrance_ignores_cycle_order() {
        let config = PanelConfig::DEFAULT
            .with_strategy(ModeStrategy::Entrance)
            .with_cycle_order(&[]);
        assert_eq!(config.validate(), Ok(()));
    }
}

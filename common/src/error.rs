//! Error types for the panel engine.
//!
//! All variants carry only fixed-size data so the types stay `Copy` and need
//! no allocator. None of these errors ever stop the main loop: the loop logs
//! them and degrades the current tick instead.

use core::fmt;

use crate::state::DisplayMode;
use crate::stats::StatSource;

/// Failure reported by an external collaborator.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PanelError {
    /// A stats source could not be read (network, parse or command failure).
    StatsUnavailable(StatSource),

    /// A stats source did not answer within its time budget.
    Timeout,

    /// The sprite sheet is missing or its pixel data does not match its geometry.
    SpriteUnavailable,

    /// The presenter could not push a frame to the display.
    Present,

    /// The reboot action could not be carried out.
    Reboot,
}

impl fmt::Display for PanelError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::StatsUnavailable(source) => write!(f, "{} stats unavailable", source.label()),
            Self::Timeout => f.write_str("stats fetch timed out"),
            Self::SpriteUnavailable => f.write_str("sprite sheet unavailable"),
            Self::Present => f.write_str("frame hand-off to display failed"),
            Self::Reboot => f.write_str("reboot action failed"),
        }
    }
}

impl core::error::Error for PanelError {}

/// Rejected [`PanelConfig`](crate::config::PanelConfig) value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigError {
    /// Tick period is zero.
    ZeroTickPeriod,

    /// Globe frame delay is zero.
    ZeroFrameDelay,

    /// Entrance animation has no frames.
    ZeroAnimationFrames,

    /// Hold threshold is shorter than one tick, so it could never be observed.
    HoldShorterThanTick,

    /// Page cycle is empty.
    EmptyCycle,

    /// Page cycle contains a mode that is not a page.
    ForeignCycleMode(DisplayMode),
}

impl fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::ZeroTickPeriod => f.write_str("tick period must be non-zero"),
            Self::ZeroFrameDelay => f.write_str("globe frame delay must be non-zero"),
            Self::ZeroAnimationFrames => f.write_str("entrance animation needs at least one frame"),
            Self::HoldShorterThanTick => f.write_str("hold threshold is shorter than one tick"),
            Self::EmptyCycle => f.write_str("page cycle is empty"),
            Self::ForeignCycleMode(mode) => write!(f, "{} is not a page and cannot be cycled", mode.label()),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_error_messages() {
        assert_eq!(
            PanelError::StatsUnavailable(StatSource::Pihole).to_string(),
            "pihole stats unavailable"
        );
        assert_eq!(PanelError::Reboot.to_string(), "reboot action failed");
    }

    #[test]
    fn test_config_error_names_mode() {
        let msg = ConfigError::ForeignCycleMode(DisplayMode::Static).to_string();
        assert!(msg.contains("static"), "got {msg}");
    }
}

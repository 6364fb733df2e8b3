//! Color constants for the status panel.
//!
//! The panel uses a dark brown / orange theme. Values below are the RGB888
//! theme colors reduced to RGB565 (5 bits red, 6 bits green, 5 bits blue),
//! which is the native format of the ST7789 controller.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Blank frames and the globe page background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Text on the reboot warning.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Theme Colors
// =============================================================================

/// Dark brown page background. RGB888 (25, 15, 5).
pub const BACKGROUND: Rgb565 = Rgb565::new(3, 3, 0);

/// Brown grid lines behind the entrance and standby screens. RGB888 (60, 40, 20).
pub const GRID: Rgb565 = Rgb565::new(7, 10, 2);

/// Orange accent for headers, dividers, corner accents and row labels. RGB888 (255, 140, 0).
pub const ACCENT: Rgb565 = Rgb565::new(31, 35, 0);

/// Orange value text. RGB888 (255, 160, 50).
pub const TEXT: Rgb565 = Rgb565::new(31, 40, 6);

/// Red warning color. Hot CPU label, reboot fill, missing sprite message. RGB888 (255, 50, 50).
pub const WARN: Rgb565 = Rgb565::new(31, 12, 6);

/// Light orange status color for the standby prompt. RGB888 (255, 180, 80).
pub const STATUS: Rgb565 = Rgb565::new(31, 45, 10);

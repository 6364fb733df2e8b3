//! Stat threshold classification.
//!
//! Temperatures arrive as display strings (`"48.3°C"`), so classification
//! parses them first. Anything that does not parse is treated as normal: a
//! broken sensor read should not paint the panel red.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{ACCENT, WARN};

// =============================================================================
// CPU Temperature Thresholds
// =============================================================================

/// CPU temperature where the label switches to the warning color.
/// Strictly above this value is a warning; exactly 60.0C is still normal.
pub const CPU_TEMP_WARNING_C: f32 = 60.0;

/// Parse a temperature string such as `"65.0°C"`, `"65.0C"` or `"65"`.
///
/// Returns `None` for the sentinel, empty input, or non-finite values.
pub fn parse_celsius(s: &str) -> Option<f32> {
    let trimmed = s.trim();
    let number = trimmed
        .strip_suffix("°C")
        .or_else(|| trimmed.strip_suffix('C'))
        .unwrap_or(trimmed)
        .trim();
    number.parse::<f32>().ok().filter(|value| value.is_finite())
}

/// Classification of a CPU temperature reading.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum TempClass {
    #[default]
    Normal,
    Warning,
}

impl TempClass {
    /// Label color for the CPU TEMP row.
    #[inline]
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Normal => ACCENT,
            Self::Warning => WARN,
        }
    }
}

/// Classify a CPU temperature string against `threshold_c`.
pub fn classify_cpu_temp(
    s: &str,
    threshold_c: f32,
) -> TempClass {
    match parse_celsius(s) {
        Some(celsius) if celsius > threshold_c => TempClass::Warning,
        _ => TempClass::Normal,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! Font selection and text metrics.
//!
//! Frames describe text by pixel height only. Both the compositor (which needs
//! widths to center blocks) and the renderer (which rasterizes) resolve that
//! height through [`font_for_px`], so measured and drawn text always agree.
//!
//! Only monospaced fonts are used, which keeps width measurement a single
//! multiplication.
//!
//! The embedded-graphics fonts come from the ISO 8859-1 set so stat values
//! like `48.0°C` draw their degree sign.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::iso_8859_1::{
    FONT_4X6,
    FONT_5X8,
    FONT_6X10,
    FONT_6X12,
    FONT_7X14,
    FONT_9X15,
    FONT_9X18,
    FONT_10X20,
};
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

/// Text anchored at its top-left corner. Every text primitive uses this.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Fallback when nothing fits the requested height.
const SMALLEST_FONT: &MonoFont<'static> = &FONT_4X6;

/// Candidate fonts. Order does not matter, selection compares heights.
const FONTS: [&MonoFont<'static>; 10] = [
    &FONT_4X6,
    &FONT_5X8,
    &FONT_6X10,
    &FONT_6X12,
    &FONT_7X14,
    &FONT_9X15,
    &FONT_9X18,
    &FONT_10X20,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Largest font whose glyph height does not exceed `px`.
pub fn font_for_px(px: u8) -> &'static MonoFont<'static> {
    let px = u32::from(px);
    FONTS
        .iter()
        .copied()
        .filter(|font| font.character_size.height <= px)
        .max_by_key(|font| font.character_size.height)
        .unwrap_or(SMALLEST_FONT)
}

/// Rendered width of `text` at height `px`.
pub fn text_width(
    text: &str,
    px: u8,
) -> u32 {
    let font = font_for_px(px);
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * font.character_size.width + (chars - 1) * font.character_spacing
}

/// Rendered height of a line of text at height `px`.
#[inline]
pub fn text_height(px: u8) -> u32 { font_for_px(px).character_size.height }

#[cfg(test)]
mod tests {
    use embedded_graphics::geometry::Size;

    use super::*;

    #[test]
    fn test_exact_heights_pick_matching_font() {
        assert_eq!(font_for_px(10).character_size, Size::new(6, 10));
        assert_eq!(font_for_px(12).character_size, Size::new(6, 12));
        assert_eq!(font_for_px(14).character_size, Size::new(7, 14));
        assert_eq!(font_for_px(20).character_size, Size::new(10, 20));
    }

    #[test]
    fn test_between_heights_rounds_down() {
        assert_eq!(font_for_px(11).character_size, Size::new(6, 10));
        assert_eq!(font_for_px(13).character_size, Size::new(6, 12));
    }

    #[test]
    fn test_tiny_request_uses_smallest() {
        assert_eq!(font_for_px(1).character_size, Size::new(4, 6));
        assert_eq!(font_for_px(0).character_size, Size::new(4, 6));
    }

    #[test]
    fn test_font_never_exceeds_request() {
        for px in 6..=40u8 {
            assert!(font_for_px(px).character_size.height <= u32::from(px));
        }
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 14), 0);
        assert_eq!(text_width("ABC", 14), 21);
        assert_eq!(text_width("IP ADDRESS: ", 12), 72);
    }

    #[test]
    fn test_text_height() {
        assert_eq!(text_height(14), 14);
        assert_eq!(text_height(7), 6);
    }
}

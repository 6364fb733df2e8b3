//! Scale-about-center layout transform for the entrance animation.
//!
//! At scale `s`, a point moves toward the canvas center by `1 - s` of its
//! distance. Text is re-measured at the scaled font size and centered on the
//! scaled position of its full-size block center, so a block stays centered
//! whatever font the scaled size lands on.

use embedded_graphics::geometry::{Point, Size};

use crate::config::MIN_FONT_PX;
use crate::styles::{text_height, text_width};

/// Layout transform; identity at scale 1.0.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScaleTransform {
    center_x: f32,
    center_y: f32,
    scale: f32,
}

impl ScaleTransform {
    /// Scale about the center of `canvas`. Values above 1.0 are clamped.
    pub fn new(
        canvas: Size,
        scale: f32,
    ) -> Self {
        Self {
            center_x: canvas.width as f32 / 2.0,
            center_y: canvas.height as f32 / 2.0,
            scale: scale.clamp(0.0, 1.0),
        }
    }

    /// Full-size layout.
    #[inline]
    pub fn identity(canvas: Size) -> Self { Self::new(canvas, 1.0) }

    #[inline]
    pub const fn scale(&self) -> f32 { self.scale }

    #[inline]
    fn is_identity(&self) -> bool { self.scale >= 1.0 }

    /// Font height for text that is `px` tall at full size.
    pub fn font_px(
        &self,
        px: u8,
    ) -> u8 {
        if self.is_identity() {
            return px;
        }
        let scaled = micromath::F32(f32::from(px) * self.scale).round().0 as u8;
        scaled.max(MIN_FONT_PX).min(px)
    }

    /// Position of a full-size point.
    pub fn point(
        &self,
        p: Point,
    ) -> Point {
        if self.is_identity() {
            return p;
        }
        Point::new(
            round_i32(self.center_x + (p.x as f32 - self.center_x) * self.scale),
            round_i32(self.center_y + (p.y as f32 - self.center_y) * self.scale),
        )
    }

    /// Top-left corner for a single line of text.
    ///
    /// `top_left` and `full_width` describe the line at full size; `scaled_width`
    /// is its width measured at [`Self::font_px`].
    pub fn place_line(
        &self,
        top_left: Point,
        full_width: u32,
        scaled_width: u32,
        px: u8,
    ) -> Point {
        if self.is_identity() {
            return top_left;
        }
        let full_height = text_height(px) as f32;
        let scaled_height = text_height(self.font_px(px)) as f32;
        let block_cx = top_left.x as f32 + full_width as f32 / 2.0;
        let block_cy = top_left.y as f32 + full_height / 2.0;

        Point::new(
            round_i32(self.center_x + (block_cx - self.center_x) * self.scale - scaled_width as f32 / 2.0),
            round_i32(self.center_y + (block_cy - self.center_y) * self.scale - scaled_height / 2.0),
        )
    }

    /// [`Self::place_line`] for `text` drawn `px` tall at full size.
    pub fn place_text(
        &self,
        text: &str,
        top_left: Point,
        px: u8,
    ) -> Point {
        let full = text_width(text, px);
        let scaled = text_width(text, self.font_px(px));
        self.place_line(top_left, full, scaled, px)
    }
}

#[inline]
fn round_i32(value: f32) -> i32 { micromath::F32(value).round().0 as i32 }

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Size = Size::new(240, 135);

    #[test]
    fn test_identity_is_noop() {
        let t = ScaleTransform::identity(CANVAS);
        assert_eq!(t.font_px(14), 14);
        assert_eq!(t.point(Point::new(8, 4)), Point::new(8, 4));
        assert_eq!(t.place_text("SYSTEM MONITOR", Point::new(8, 4), 12), Point::new(8, 4));
    }

    #[test]
    fn test_font_px_scales_with_floor() {
        let t = ScaleTransform::new(CANVAS, 0.5);
        assert_eq!(t.font_px(14), 7);
        let t = ScaleTransform::new(CANVAS, 0.3);
        assert_eq!(t.font_px(14), MIN_FONT_PX);
        assert_eq!(t.font_px(12), MIN_FONT_PX);
    }

    #[test]
    fn test_points_move_toward_center() {
        let t = ScaleTransform::new(CANVAS, 0.5);
        assert_eq!(t.point(Point::new(120, 67)), Point::new(120, 67));
        assert_eq!(t.point(Point::new(0, 0)), Point::new(60, 34));
        assert_eq!(t.point(Point::new(240, 135)), Point::new(180, 101));
    }

    #[test]
    fn test_block_centered_on_scaled_center() {
        // A block centered on the canvas stays centered at any scale.
        let text = "ABCDEFGHIJ";
        let full = text_width(text, 14);
        let left = (240 - full as i32) / 2;
        let top = (135 - 14) / 2;
        for scale in [0.3, 0.5, 0.8] {
            let t = ScaleTransform::new(CANVAS, scale);
            let pos = t.place_text(text, Point::new(left, top), 14);
            let scaled = text_width(text, t.font_px(14)) as i32;
            let mid = pos.x + scaled / 2;
            assert!((mid - 120).abs() <= 1, "scale {scale}: mid {mid}");
        }
    }

    #[test]
    fn test_scale_clamped() {
        assert_eq!(ScaleTransform::new(CANVAS, 3.0).scale(), 1.0);
        assert_eq!(ScaleTransform::new(CANVAS, -1.0).scale(), 0.0);
    }
}

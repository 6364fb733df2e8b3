//! Rasterize a [`Frame`] onto a display.
//!
//! This is the only place primitives become pixels. It is generic over
//! `DrawTarget<Color = Rgb565>`, so the same code drives the desktop
//! simulator window and a real panel driver.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::animations::SpriteGeometry;
use crate::colors::BLACK;
use crate::error::PanelError;
use crate::frame::{DrawPrimitive, Frame};
use crate::styles::{TOP_LEFT, font_for_px};

// =============================================================================
// Sprite Sheet
// =============================================================================

/// Pre-decoded sprite sheet: raw big-endian RGB565, row-major, no padding.
#[derive(Clone, Copy, Debug)]
pub struct SpriteSheet<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    geometry: SpriteGeometry,
}

impl<'a> SpriteSheet<'a> {
    /// Wrap `data`, checking that its size matches `width` x `height` and
    /// that every frame of `geometry` lies inside the sheet.
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        geometry: SpriteGeometry,
    ) -> Result<Self, PanelError> {
        let expected = width as usize * height as usize * 2;
        if data.len() != expected {
            return Err(PanelError::SpriteUnavailable);
        }
        let needed = geometry.sheet_size();
        if needed.width == 0 || needed.width > width || needed.height > height {
            return Err(PanelError::SpriteUnavailable);
        }
        Ok(Self {
            data,
            width,
            height,
            geometry,
        })
    }

    #[inline]
    pub const fn geometry(&self) -> SpriteGeometry { self.geometry }

    #[inline]
    pub const fn size(&self) -> Size { Size::new(self.width, self.height) }

    /// Pixel at `(x, y)`; black outside the sheet.
    pub fn pixel(
        &self,
        x: u32,
        y: u32,
    ) -> Rgb565 {
        if x >= self.width || y >= self.height {
            return BLACK;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 2;
        let raw = u16::from_be_bytes([self.data[offset], self.data[offset + 1]]);
        Rgb565::from(RawU16::new(raw))
    }
}

// =============================================================================
// Frame Rendering
// =============================================================================

/// Draw every primitive of `frame` in order.
///
/// Blits are skipped when no sheet is supplied.
pub fn draw_frame<D>(
    frame: &Frame,
    display: &mut D,
    sheet: Option<&SpriteSheet<'_>>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for primitive in frame.primitives() {
        match primitive {
            DrawPrimitive::Fill { area, color } => {
                area.into_styled(PrimitiveStyle::with_fill(*color)).draw(display)?;
            }
            DrawPrimitive::Line {
                start,
                end,
                color,
                width,
            } => {
                Line::new(*start, *end)
                    .into_styled(PrimitiveStyle::with_stroke(*color, *width))
                    .draw(display)?;
            }
            DrawPrimitive::Text {
                text,
                position,
                size_px,
                color,
            } => {
                let style = MonoTextStyle::new(font_for_px(*size_px), *color);
                Text::with_text_style(text, *position, style, TOP_LEFT).draw(display)?;
            }
            DrawPrimitive::Blit { source, dest } => {
                if let Some(sheet) = sheet {
                    blit(sheet, source, dest, display)?;
                }
            }
        }
    }
    Ok(())
}

/// Nearest-neighbour copy of `source` into `dest`.
fn blit<D>(
    sheet: &SpriteSheet<'_>,
    source: &Rectangle,
    dest: &Rectangle,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (dw, dh) = (dest.size.width, dest.size.height);
    let (sw, sh) = (source.size.width, source.size.height);
    if dw == 0 || dh == 0 || sw == 0 || sh == 0 {
        return Ok(());
    }
    let sx0 = source.top_left.x.max(0) as u32;
    let sy0 = source.top_left.y.max(0) as u32;

    let colors = (0..dh).flat_map(move |dy| {
        let sy = sy0 + dy * sh / dh;
        (0..dw).map(move |dx| sheet.pixel(sx0 + dx * sw / dw, sy))
    });
    display.fill_contiguous(dest, colors)
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::colors::{ACCENT, WARN};

    /// Minimal framebuffer target.
    struct Canvas {
        size: Size,
        pixels: Vec<Rgb565>,
    }

    impl Canvas {
        fn new(
            width: u32,
            height: u32,
        ) -> Self {
            Self {
                size: Size::new(width, height),
                pixels: vec![BLACK; (width * height) as usize],
            }
        }

        fn at(
            &self,
            x: u32,
            y: u32,
        ) -> Rgb565 {
            self.pixels[(y * self.size.width + x) as usize]
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size { self.size }
    }

    impl DrawTarget for Canvas {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0
                    && point.y >= 0
                    && (point.x as u32) < self.size.width
                    && (point.y as u32) < self.size.height
                {
                    let index = point.y as u32 * self.size.width + point.x as u32;
                    self.pixels[index as usize] = color;
                }
            }
            Ok(())
        }
    }

    const TINY: SpriteGeometry = SpriteGeometry {
        frame_width: 2,
        frame_height: 2,
        frames_per_row: 2,
        total_frames: 2,
    };

    /// 4x2 sheet: frame 0 is all WARN, frame 1 is all ACCENT.
    fn tiny_sheet() -> Vec<u8> {
        let mut data = Vec::new();
        for _y in 0..2 {
            for x in 0..4 {
                let color = if x < 2 { WARN } else { ACCENT };
                data.extend_from_slice(&color.into_storage().to_be_bytes());
            }
        }
        data
    }

    #[test]
    fn test_sheet_rejects_wrong_size() {
        let data = tiny_sheet();
        assert!(SpriteSheet::new(&data, 4, 2, TINY).is_ok());
        assert_eq!(
            SpriteSheet::new(&data[..10], 4, 2, TINY).err(),
            Some(PanelError::SpriteUnavailable)
        );
        // Geometry needs more frames than the sheet holds.
        let big = SpriteGeometry {
            total_frames: 4,
            ..TINY
        };
        assert_eq!(SpriteSheet::new(&data, 4, 2, big).err(), Some(PanelError::SpriteUnavailable));
    }

    #[test]
    fn test_sheet_pixels() {
        let data = tiny_sheet();
        let sheet = SpriteSheet::new(&data, 4, 2, TINY).unwrap();
        assert_eq!(sheet.pixel(0, 0), WARN);
        assert_eq!(sheet.pixel(3, 1), ACCENT);
        assert_eq!(sheet.pixel(4, 0), BLACK);
    }

    #[test]
    fn test_draw_fill_and_line() {
        let mut frame = Frame::new();
        frame.fill(Rectangle::new(Point::new(1, 1), Size::new(2, 2)), WARN);
        frame.line(Point::new(0, 4), Point::new(3, 4), ACCENT, 1);

        let mut canvas = Canvas::new(8, 8);
        draw_frame(&frame, &mut canvas, None).unwrap();
        assert_eq!(canvas.at(0, 0), BLACK);
        assert_eq!(canvas.at(2, 2), WARN);
        assert_eq!(canvas.at(3, 4), ACCENT);
        assert_eq!(canvas.at(4, 4), BLACK);
    }

    #[test]
    fn test_blit_scales_tile() {
        let data = tiny_sheet();
        let sheet = SpriteSheet::new(&data, 4, 2, TINY).unwrap();
        let mut frame = Frame::new();
        frame.blit(TINY.tile(1), Rectangle::new(Point::new(2, 2), Size::new(4, 4)));

        let mut canvas = Canvas::new(8, 8);
        draw_frame(&frame, &mut canvas, Some(&sheet)).unwrap();
        assert_eq!(canvas.at(2, 2), ACCENT);
        assert_eq!(canvas.at(5, 5), ACCENT);
        assert_eq!(canvas.at(1, 1), BLACK);
        assert_eq!(canvas.at(6, 6), BLACK);
    }

    #[test]
    fn test_blit_without_sheet_is_skipped() {
        let mut frame = Frame::new();
        frame.blit(TINY.tile(0), Rectangle::new(Point::zero(), Size::new(4, 4)));
        let mut canvas = Canvas::new(8, 8);
        draw_frame(&frame, &mut canvas, None).unwrap();
        assert!(canvas.pixels.iter().all(|p| *p == BLACK));
    }

    #[test]
    fn test_degree_sign_has_its_own_glyph() {
        let render = |text: &str| {
            let mut frame = Frame::new();
            frame.text(text, Point::zero(), 14, ACCENT);
            let mut canvas = Canvas::new(64, 16);
            draw_frame(&frame, &mut canvas, None).unwrap();
            canvas.pixels
        };
        let degree = render("°");
        assert!(degree.iter().any(|p| *p == ACCENT));
        assert_ne!(degree, render("?"));
    }

    #[test]
    fn test_text_draws_pixels() {
        let mut frame = Frame::new();
        frame.text("X", Point::zero(), 14, ACCENT);
        let mut canvas = Canvas::new(16, 16);
        draw_frame(&frame, &mut canvas, None).unwrap();
        assert!(canvas.pixels.iter().any(|p| *p == ACCENT));
    }
}

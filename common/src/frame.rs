//! One frame's worth of draw primitives.
//!
//! The compositor emits primitives in painter's order; the renderer replays
//! them onto any `DrawTarget`. Storage is a fixed-capacity `heapless::Vec`.
//! If a page ever produces more primitives than fit, the extras are dropped
//! and the frame is flagged so the main loop can log it.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use heapless::{String, Vec};

use crate::config::GRID_MAX_LINES;
use crate::stats::bounded;

/// Primitive capacity per frame.
pub const MAX_PRIMITIVES: usize = 64;

// Densest page on any canvas: background, a capped grid, eight accents, then
// header, divider and four label/value rows.
const _: () = assert!(1 + 2 * GRID_MAX_LINES as usize + 8 + 2 + 8 <= MAX_PRIMITIVES);

/// Capacity of a single text primitive.
pub const TEXT_LEN: usize = 48;

/// A single drawing operation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DrawPrimitive {
    /// Solid rectangle.
    Fill { area: Rectangle, color: Rgb565 },
    /// Straight line of the given stroke width.
    Line {
        start: Point,
        end: Point,
        color: Rgb565,
        width: u32,
    },
    /// Text anchored at its top-left corner, in the font nearest `size_px`.
    Text {
        text: String<TEXT_LEN>,
        position: Point,
        size_px: u8,
        color: Rgb565,
    },
    /// Copy `source` from the sprite sheet into `dest`, scaling to fit.
    Blit { source: Rectangle, dest: Rectangle },
}

/// Ordered primitive list for one redraw.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Frame {
    primitives: Vec<DrawPrimitive, MAX_PRIMITIVES>,
    overflowed: bool,
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            primitives: Vec::new(),
            overflowed: false,
        }
    }

    /// A frame that only clears `canvas` to black.
    pub fn blank(canvas: Size) -> Self {
        let mut frame = Self::new();
        frame.fill(Rectangle::new(Point::zero(), canvas), crate::colors::BLACK);
        frame
    }

    pub fn push(
        &mut self,
        primitive: DrawPrimitive,
    ) {
        if self.primitives.push(primitive).is_err() {
            self.overflowed = true;
        }
    }

    pub fn fill(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    ) {
        self.push(DrawPrimitive::Fill { area, color });
    }

    pub fn line(
        &mut self,
        start: Point,
        end: Point,
        color: Rgb565,
        width: u32,
    ) {
        self.push(DrawPrimitive::Line {
            start,
            end,
            color,
            width,
        });
    }

    pub fn text(
        &mut self,
        text: &str,
        position: Point,
        size_px: u8,
        color: Rgb565,
    ) {
        self.push(DrawPrimitive::Text {
            text: bounded(text),
            position,
            size_px,
            color,
        });
    }

    pub fn blit(
        &mut self,
        source: Rectangle,
        dest: Rectangle,
    ) {
        self.push(DrawPrimitive::Blit { source, dest });
    }

    #[inline]
    pub fn primitives(&self) -> &[DrawPrimitive] { &self.primitives }

    /// Text strings in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            DrawPrimitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether primitives were dropped for lack of room.
    #[inline]
    pub const fn overflowed(&self) -> bool { self.overflowed }

    #[inline]
    pub fn len(&self) -> usize { self.primitives.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.primitives.is_empty() }
}

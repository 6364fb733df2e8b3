//! Full-screen messages drawn over (or instead of) a page.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{STATUS, WARN, WHITE};
use crate::config::{DATA_FONT_PX, OVERLAY_FONT_PX, SPRITE_MISSING_X};
use crate::frame::Frame;
use crate::styles::{text_height, text_width};

const REBOOT_TEXT: &str = "REBOOTING...";
const STANDBY_TEXT: &str = "PRESS A";
const SPRITE_MISSING_TEXT: &str = "Globe sprite not found";

/// Top-left corner that centers `text` on `canvas`.
fn centered(
    text: &str,
    px: u8,
    canvas: Size,
) -> Point {
    let w = text_width(text, px) as i32;
    let h = text_height(px) as i32;
    Point::new(
        (canvas.width as i32 - w) / 2,
        (canvas.height as i32 - h) / 2,
    )
}

/// Solid warning fill with a centered white notice.
pub fn draw_reboot_overlay(
    frame: &mut Frame,
    canvas: Size,
) {
    frame.fill(Rectangle::new(Point::zero(), canvas), WARN);
    frame.text(REBOOT_TEXT, centered(REBOOT_TEXT, OVERLAY_FONT_PX, canvas), OVERLAY_FONT_PX, WHITE);
}

/// Prompt shown on the standby screen.
pub fn draw_standby_prompt(
    frame: &mut Frame,
    canvas: Size,
) {
    frame.text(STANDBY_TEXT, centered(STANDBY_TEXT, OVERLAY_FONT_PX, canvas), OVERLAY_FONT_PX, STATUS);
}

/// Replaces the globe when no sprite sheet is loaded.
pub fn draw_sprite_missing(
    frame: &mut Frame,
    canvas: Size,
) {
    let position = Point::new(SPRITE_MISSING_X, canvas.height as i32 / 2);
    frame.text(SPRITE_MISSING_TEXT, position, DATA_FONT_PX, WARN);
}

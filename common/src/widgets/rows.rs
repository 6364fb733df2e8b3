//! Header and label/value data rows.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;

use crate::colors::{ACCENT, TEXT};
use crate::config::{DATA_FONT_PX, HEADER_FONT_PX, HEADER_Y, MARGIN_X, ROW_PITCH, ROW_START_Y};
use crate::frame::Frame;
use crate::styles::text_width;
use crate::widgets::ScaleTransform;

/// One `LABEL: value` line.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StatRow<'a> {
    pub label: &'static str,
    pub value: &'a str,
    /// Color of the label; the value is always drawn in `TEXT`.
    pub label_color: Rgb565,
}

impl<'a> StatRow<'a> {
    /// Row with the default accent label.
    pub const fn new(
        label: &'static str,
        value: &'a str,
    ) -> Self {
        Self {
            label,
            value,
            label_color: ACCENT,
        }
    }

    pub const fn with_label_color(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.label_color = color;
        self
    }
}

/// `LABEL:` and `LABEL: ` (the latter positions the value).
fn label_texts(label: &str) -> (String<24>, String<24>) {
    let mut drawn = String::new();
    let mut spaced = String::new();
    for c in label.chars() {
        if drawn.push(c).is_err() {
            break;
        }
        spaced.push(c).ok();
    }
    drawn.push(':').ok();
    spaced.push_str(": ").ok();
    (drawn, spaced)
}

/// Page title in the header band.
pub fn draw_header(
    frame: &mut Frame,
    title: &str,
    transform: &ScaleTransform,
) {
    let px = transform.font_px(HEADER_FONT_PX);
    let position = transform.place_text(title, Point::new(MARGIN_X, HEADER_Y), HEADER_FONT_PX);
    frame.text(title, position, px, ACCENT);
}

/// Draw `row` as the `index`th data row.
///
/// Label and value are placed as one block so the pair stays together when
/// the layout is scaled.
pub fn draw_data_row(
    frame: &mut Frame,
    index: usize,
    row: &StatRow<'_>,
    transform: &ScaleTransform,
) {
    let (drawn, spaced) = label_texts(row.label);
    let full_px = DATA_FONT_PX;
    let px = transform.font_px(full_px);

    let full_label_w = text_width(&spaced, full_px);
    let full_w = full_label_w + text_width(row.value, full_px);
    let label_w = text_width(&spaced, px);
    let scaled_w = label_w + text_width(row.value, px);

    let top_left = Point::new(MARGIN_X, ROW_START_Y + index as i32 * ROW_PITCH);
    let position = transform.place_line(top_left, full_w, scaled_w, full_px);

    frame.text(&drawn, position, px, row.label_color);
    frame.text(row.value, position + Point::new(label_w as i32, 0), px, TEXT);
}

/// Data rows in order, from the first row slot.
pub fn draw_rows(
    frame: &mut Frame,
    rows: &[StatRow<'_>],
    transform: &ScaleTransform,
) {
    for (index, row) in rows.iter().enumerate() {
        draw_data_row(frame, index, row, transform);
    }
}

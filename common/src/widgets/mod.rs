//! Widget components for the status panel.
//!
//! Widgets append draw primitives to a [`Frame`](crate::frame::Frame) rather
//! than drawing directly, so a page can be inspected before it is rendered.

mod popups;
mod primitives;
mod rows;
mod scale;

pub use popups::{draw_reboot_overlay, draw_sprite_missing, draw_standby_prompt};
pub use primitives::{draw_background, draw_corner_accents, draw_divider, draw_grid};
pub use rows::{StatRow, draw_data_row, draw_header, draw_rows};
pub use scale::ScaleTransform;

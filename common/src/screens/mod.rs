//! Frame compositor: turns the current mode, animation state and stats into a
//! [`Frame`].
//!
//! Composition is pure. The same inputs always produce the same primitives,
//! and nothing here touches a display or a collaborator.
//!
//! Every page is painted in the same layer order: background, borders and
//! grid, header, divider, data rows, then any overlay.

mod entrance;
mod globe;
mod pihole;
mod system;

use embedded_graphics::geometry::Size;

pub use entrance::{compose_entrance, compose_standby};
pub use globe::compose_globe;
pub use pihole::{PIHOLE_TITLE, compose_pihole};
pub use system::{SYSTEM_TITLE, compose_system};

use crate::animations::{AnimationState, SpriteGeometry, entrance_scale};
use crate::config::PanelConfig;
use crate::frame::Frame;
use crate::state::DisplayMode;
use crate::stats::StatSnapshot;
use crate::widgets::draw_reboot_overlay;

/// Everything one frame depends on.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext<'a> {
    pub mode: DisplayMode,
    pub animation: &'a AnimationState,
    pub stats: &'a StatSnapshot,
    pub canvas: Size,
    /// `None` when the sprite sheet failed to load.
    pub sprite: Option<SpriteGeometry>,
    pub config: &'a PanelConfig,
}

/// Build the frame for `ctx.mode`.
///
/// A snapshot of the wrong kind for the mode is drawn as sentinels.
pub fn compose(ctx: &FrameContext<'_>) -> Frame {
    let canvas = ctx.canvas;
    let temp_warning_c = ctx.config.temp_warning_c;
    match ctx.mode {
        DisplayMode::Pihole => compose_pihole(canvas, &ctx.stats.pihole_or_unavailable(), temp_warning_c),
        DisplayMode::System => compose_system(canvas, &ctx.stats.system_or_unavailable()),
        DisplayMode::Globe => compose_globe(canvas, ctx.sprite, ctx.animation),
        DisplayMode::Standby => compose_standby(canvas),
        DisplayMode::Animating(_) | DisplayMode::Static => {
            let scale = if ctx.mode == DisplayMode::Static {
                1.0
            } else {
                entrance_scale(ctx.animation.frame, ctx.config.entrance_frames)
            };
            compose_entrance(canvas, &ctx.stats.pihole_or_unavailable(), temp_warning_c, scale)
        }
    }
}

/// Display-off frame.
#[inline]
pub fn compose_blank(canvas: Size) -> Frame { Frame::blank(canvas) }

/// One-shot frame shown just before the reboot action runs.
pub fn compose_reboot(canvas: Size) -> Frame {
    let mut frame = Frame::new();
    draw_reboot_overlay(&mut frame, canvas);
    frame
}

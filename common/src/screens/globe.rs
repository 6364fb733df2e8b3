//! Globe page: one sprite tile, scaled and centered on black.

use embedded_graphics::prelude::*;

use crate::animations::{AnimationState, SpriteGeometry};
use crate::colors::{BACKGROUND, BLACK};
use crate::config::GLOBE_FILL_RATIO;
use crate::frame::Frame;
use crate::widgets::{draw_background, draw_sprite_missing};

/// Globe frame for the current animation state, or the missing-sprite notice.
pub fn compose_globe(
    canvas: Size,
    sprite: Option<SpriteGeometry>,
    animation: &AnimationState,
) -> Frame {
    let mut frame = Frame::new();
    match sprite {
        Some(sprite) => {
            draw_background(&mut frame, canvas, BLACK);
            frame.blit(sprite.tile(animation.frame), sprite.fit(canvas, GLOBE_FILL_RATIO));
        }
        None => {
            draw_background(&mut frame, canvas, BACKGROUND);
            draw_sprite_missing(&mut frame, canvas);
        }
    }
    frame
}

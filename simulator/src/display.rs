//! SDL window presenter and keyboard-backed buttons.
//!
//! Keys:
//! - `A`: button A (next page / start entrance)
//! - `B`: button B (display on/off)
//! - hold `A` + `B`: reboot gesture
//! - `F`: toggle simulated stat failures

use std::cell::Cell;
use std::process;
use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info};
use statpanel_common::colors::BLACK;
use statpanel_common::{ButtonId, Frame, InputSource, PanelError, Presenter, SpriteSheet, draw_frame};

// =============================================================================
// Key State
// =============================================================================

/// Keyboard levels shared between the window and the engine's collaborators.
#[derive(Default)]
pub struct KeyState {
    a: Cell<bool>,
    b: Cell<bool>,
    stats_failing: Cell<bool>,
}

impl KeyState {
    #[inline]
    pub fn stats_failing(&self) -> bool { self.stats_failing.get() }

    fn apply(
        &self,
        keycode: Keycode,
        down: bool,
    ) {
        match keycode {
            Keycode::A => self.a.set(down),
            Keycode::B => self.b.set(down),
            Keycode::F if down => {
                let failing = !self.stats_failing.get();
                self.stats_failing.set(failing);
                info!("simulated stat failures {}", if failing { "on" } else { "off" });
            }
            _ => {}
        }
    }
}

/// Buttons read from [`KeyState`].
pub struct SimInput {
    keys: Rc<KeyState>,
}

impl SimInput {
    pub const fn new(keys: Rc<KeyState>) -> Self { Self { keys } }
}

impl InputSource for SimInput {
    fn read(
        &mut self,
        button: ButtonId,
    ) -> bool {
        match button {
            ButtonId::A => self.keys.a.get(),
            ButtonId::B => self.keys.b.get(),
        }
    }
}

// =============================================================================
// Presenter
// =============================================================================

/// Draws frames into an SDL window and pumps its events.
pub struct SimPresenter<'a> {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    sheet: Option<SpriteSheet<'a>>,
    keys: Rc<KeyState>,
}

impl<'a> SimPresenter<'a> {
    pub fn new(
        size: Size,
        scale: u32,
        sheet: Option<SpriteSheet<'a>>,
        keys: Rc<KeyState>,
    ) -> Self {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(size);
        let output_settings = OutputSettingsBuilder::new().scale(scale).build();
        let mut window = Window::new("Status Panel Sim", &output_settings);

        display.clear(BLACK).ok();
        window.update(&display);

        Self {
            display,
            window,
            sheet,
            keys,
        }
    }

    fn poll_events(&mut self) {
        for ev in self.window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    info!("window closed");
                    process::exit(0);
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    debug!("key down {keycode:?}");
                    self.keys.apply(keycode, true);
                }
                SimulatorEvent::KeyUp { keycode, .. } => self.keys.apply(keycode, false),
                _ => {}
            }
        }
    }
}

impl Presenter for SimPresenter<'_> {
    fn size(&self) -> Size { self.display.size() }

    fn present(
        &mut self,
        frame: &Frame,
    ) -> Result<(), PanelError> {
        draw_frame(frame, &mut self.display, self.sheet.as_ref()).map_err(|_| PanelError::Present)?;
        self.window.update(&self.display);
        self.poll_events();
        Ok(())
    }
}

//! Button edge detection.
//!
//! Each tick the raw pressed/released level of both buttons is fed in and
//! converted to one-shot press and release edges. There is no time-based
//! filter: the fixed tick period is the debounce interval, so contact bounce
//! faster than one tick is not filtered out.

/// The two physical buttons on the panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonId {
    /// Cycles pages / starts the entrance animation.
    A,
    /// Toggles the display on and off.
    B,
}

impl ButtonId {
    /// Both buttons in sampling order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Transition observed on a single tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Edge {
    /// Level unchanged since the previous tick.
    #[default]
    None,
    /// Went from released to pressed.
    Pressed,
    /// Went from pressed to released.
    Released,
}

/// Per-button sampling state.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ButtonEdgeState {
    /// Level sampled on the latest tick.
    pub raw: bool,
    /// Accepted level after debouncing.
    pub debounced: bool,
    /// Accepted level from the tick before the latest one.
    pub was_pressed_last_tick: bool,
}

impl ButtonEdgeState {
    /// Released, with no history.
    pub const fn new() -> Self {
        Self {
            raw: false,
            debounced: false,
            was_pressed_last_tick: false,
        }
    }

    /// Accept a new sample and report the edge it produced.
    pub fn update(
        &mut self,
        raw_pressed: bool,
    ) -> Edge {
        self.raw = raw_pressed;
        let edge = match (raw_pressed, self.was_pressed_last_tick) {
            (true, false) => Edge::Pressed,
            (false, true) => Edge::Released,
            _ => Edge::None,
        };
        self.debounced = raw_pressed;
        self.was_pressed_last_tick = raw_pressed;
        edge
    }
}

/// Edge detector for both buttons.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Debouncer {
    buttons: [ButtonEdgeState; 2],
}

impl Debouncer {
    /// Both buttons released.
    pub const fn new() -> Self {
        Self {
            buttons: [ButtonEdgeState::new(); 2],
        }
    }

    /// Feed one raw sample for `button`.
    #[inline]
    pub fn update(
        &mut self,
        button: ButtonId,
        raw_pressed: bool,
    ) -> Edge {
        self.buttons[button.index()].update(raw_pressed)
    }

    /// Debounced level of `button`.
    #[inline]
    pub const fn is_pressed(
        &self,
        button: ButtonId,
    ) -> bool {
        self.buttons[button.index()].debounced
    }

    /// Whether both buttons are currently held down.
    #[inline]
    pub const fn both_pressed(&self) -> bool { self.is_pressed(ButtonId::A) && self.is_pressed(ButtonId::B) }

    #[cfg(test)]
    const fn state(
        &self,
        button: ButtonId,
    ) -> ButtonEdgeState {
        self.buttons[button.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(samples: &[bool]) -> Vec<Edge> {
        let mut debouncer = Debouncer::new();
        samples
            .iter()
            .map(|&raw| debouncer.update(ButtonId::A, raw))
            .collect()
    }

    #[test]
    fn test_press_fires_once_per_run() {
        let edges = feed(&[false, true, true, true, false, false, true]);
        let presses = edges.iter().filter(|e| **e == Edge::Pressed).count();
        let releases = edges.iter().filter(|e| **e == Edge::Released).count();
        assert_eq!(presses, 2);
        assert_eq!(releases, 1);
        assert_eq!(edges[1], Edge::Pressed);
        assert_eq!(edges[4], Edge::Released);
    }

    #[test]
    fn test_initial_release_is_not_an_edge() {
        assert_eq!(feed(&[false, false]), vec![Edge::None, Edge::None]);
    }

    #[test]
    fn test_held_from_first_sample() {
        assert_eq!(feed(&[true, true]), vec![Edge::Pressed, Edge::None]);
    }

    #[test]
    fn test_single_tick_bounce_passes_through() {
        // Bounce shorter than a tick is not filtered.
        let edges = feed(&[true, false, true]);
        assert_eq!(edges, vec![Edge::Pressed, Edge::Released, Edge::Pressed]);
    }

    #[test]
    fn test_edges_alternate_for_any_sequence() {
        let samples = [
            true, true, false, true, false, false, false, true, true, false, true, true, true, false,
        ];
        let edges = feed(&samples);

        // Count contiguous runs in the input (ignoring a leading run of false).
        let mut true_runs = 0;
        let mut false_runs_after_true = 0;
        let mut prev = false;
        for &s in &samples {
            if s && !prev {
                true_runs += 1;
            }
            if !s && prev {
                false_runs_after_true += 1;
            }
            prev = s;
        }

        assert_eq!(edges.iter().filter(|e| **e == Edge::Pressed).count(), true_runs);
        assert_eq!(
            edges.iter().filter(|e| **e == Edge::Released).count(),
            false_runs_after_true
        );

        // Press and release strictly alternate.
        let mut expect_press = true;
        for edge in edges.iter().filter(|e| **e != Edge::None) {
            assert_eq!(*edge == Edge::Pressed, expect_press);
            expect_press = !expect_press;
        }
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut debouncer = Debouncer::new();
        assert_eq!(debouncer.update(ButtonId::A, true), Edge::Pressed);
        assert_eq!(debouncer.update(ButtonId::B, false), Edge::None);
        assert!(debouncer.is_pressed(ButtonId::A));
        assert!(!debouncer.is_pressed(ButtonId::B));
        assert!(!debouncer.both_pressed());

        assert_eq!(debouncer.update(ButtonId::B, true), Edge::Pressed);
        assert!(debouncer.both_pressed());
    }

    #[test]
    fn test_state_tracks_last_sample() {
        let mut debouncer = Debouncer::new();
        debouncer.update(ButtonId::B, true);
        let state = debouncer.state(ButtonId::B);
        assert!(state.raw);
        assert!(state.debounced);
        assert!(state.was_pressed_last_tick);
    }
}

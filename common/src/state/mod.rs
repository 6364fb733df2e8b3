//! Persistent control state: button edges, the reboot hold gesture and the
//! display mode. This is everything the panel carries from one tick to the next.

mod button;
mod hold;
mod mode;

pub use button::{ButtonEdgeState, ButtonId, Debouncer, Edge};
pub use hold::HoldTracker;
pub use mode::{DisplayMode, ModeStateMachine};

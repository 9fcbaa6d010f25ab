//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types; the
//! window backend translates platform events into `Button` presses and
//! releases. `InputState` derives "currently held" purely from that stream.

mod state;
mod types;

pub use state::InputState;
pub use types::{Button, ControllerButton, Key, MouseButton};

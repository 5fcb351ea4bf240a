//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates window-system events into `InputEvent`s
//! (see `platform::winit`) and the engine rotates edge state once per frame.

mod buttons;
pub(crate) mod platform;
mod state;
mod types;

pub use buttons::ButtonSet;
pub use state::{InputState, PointerState};
pub use types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

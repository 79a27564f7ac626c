//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates window events into `InputEvent`s; `InputState`
//! tracks what is currently held so ticks can poll it.

pub(crate) mod platform;
mod state;
mod types;

pub use state::InputState;
pub(crate) use state::Dispatch;
pub use types::{
    ButtonState,
    InputEvent,
    Key,
    KeyPress,
    KeyState,
    MouseButton,
};

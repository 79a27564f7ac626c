use std::fmt;

/// Keyboard key identifier.
///
/// Covers the keys applications commonly bind. Everything else is reported as
/// `Key::Unknown` carrying the platform code, so no press is ever dropped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Key without a named variant; carries the platform code.
    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Unknown(code) => write!(f, "Unknown({code:#x})"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A key-down delivered to `App::on_key`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyPress {
    pub key: Key,
    /// Platform key code identifying the physical key (winit `KeyCode` discriminant).
    ///
    /// `0` when the platform could not identify the key.
    pub code: u32,
    /// True when the press was generated by keyboard auto-repeat.
    pub repeat: bool,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the platform layer.
///
/// Pointer coordinates are canvas-local physical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        code: u32,
        repeat: bool,
    },

    PointerMoved { x: f64, y: f64 },

    PointerButton {
        button: MouseButton,
        state: ButtonState,
    },

    /// Pointer left the canvas.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

use std::collections::HashSet;

use super::types::{ButtonState, InputEvent, Key, KeyPress, KeyState, MouseButton};

/// Press callback produced by [`InputState::apply_event`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Dispatch {
    Key(KeyPress),
    MouseDown { x: i32, y: i32, button: MouseButton },
}

/// Current input state for the display's window.
///
/// Holds "is down" information and the last known pointer position. Only presses
/// are forwarded to the application as callbacks; releases just update this state.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in canvas physical pixels.
    pub pointer_pos: Option<(f64, f64)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event and returns the press callback it triggers, if any.
    pub(crate) fn apply_event(&mut self, ev: InputEvent) -> Option<Dispatch> {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Releases are not delivered while unfocused; avoid stuck keys.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
                None
            }

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some((x, y));
                None
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                None
            }

            InputEvent::Key { key, state, code, repeat } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(key);
                    Some(Dispatch::Key(KeyPress { key, code, repeat }))
                }
                KeyState::Released => {
                    self.keys_down.remove(&key);
                    None
                }
            },

            InputEvent::PointerButton { button, state } => match state {
                ButtonState::Pressed => {
                    self.buttons_down.insert(button);
                    let (x, y) = self.pointer_pixel().unwrap_or((0, 0));
                    Some(Dispatch::MouseDown { x, y, button })
                }
                ButtonState::Released => {
                    self.buttons_down.remove(&button);
                    None
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    /// Pointer position rounded down to whole canvas pixels.
    pub fn pointer_pixel(&self) -> Option<(i32, i32)> {
        self.pointer_pos
            .map(|(x, y)| (x.floor() as i32, y.floor() as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, code: 42, repeat: false }
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn key_press_dispatches_and_is_held() {
        let mut s = InputState::default();

        let d = s.apply_event(key(Key::Space, KeyState::Pressed));
        assert_eq!(
            d,
            Some(Dispatch::Key(KeyPress { key: Key::Space, code: 42, repeat: false }))
        );
        assert!(s.key_down(Key::Space));
    }

    #[test]
    fn key_release_is_not_dispatched() {
        let mut s = InputState::default();
        s.apply_event(key(Key::A, KeyState::Pressed));

        assert_eq!(s.apply_event(key(Key::A, KeyState::Released)), None);
        assert!(!s.key_down(Key::A));
    }

    #[test]
    fn auto_repeat_presses_are_dispatched() {
        let mut s = InputState::default();
        s.apply_event(key(Key::A, KeyState::Pressed));

        let d = s.apply_event(InputEvent::Key {
            key: Key::A,
            state: KeyState::Pressed,
            code: 42,
            repeat: true,
        });
        assert!(matches!(d, Some(Dispatch::Key(KeyPress { repeat: true, .. }))));
    }

    #[test]
    fn focus_loss_clears_held_input() {
        let mut s = InputState::default();
        s.apply_event(InputEvent::Focused(true));
        s.apply_event(key(Key::W, KeyState::Pressed));
        s.apply_event(InputEvent::PointerButton {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
        });

        s.apply_event(InputEvent::Focused(false));
        assert!(!s.focused);
        assert!(s.keys_down.is_empty());
        assert!(s.buttons_down.is_empty());
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn mouse_press_uses_last_pointer_position() {
        let mut s = InputState::default();
        s.apply_event(InputEvent::PointerMoved { x: 120.7, y: 45.2 });

        let d = s.apply_event(InputEvent::PointerButton {
            button: MouseButton::Right,
            state: ButtonState::Pressed,
        });
        assert_eq!(d, Some(Dispatch::MouseDown { x: 120, y: 45, button: MouseButton::Right }));
        assert!(s.button_down(MouseButton::Right));
    }

    #[test]
    fn mouse_release_is_not_dispatched() {
        let mut s = InputState::default();
        s.apply_event(InputEvent::PointerButton {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
        });

        let d = s.apply_event(InputEvent::PointerButton {
            button: MouseButton::Left,
            state: ButtonState::Released,
        });
        assert_eq!(d, None);
        assert!(!s.button_down(MouseButton::Left));
    }

    #[test]
    fn press_without_known_pointer_reports_origin() {
        let mut s = InputState::default();
        s.apply_event(InputEvent::PointerMoved { x: 10.0, y: 10.0 });
        s.apply_event(InputEvent::PointerLeft);
        assert_eq!(s.pointer_pixel(), None);

        let d = s.apply_event(InputEvent::PointerButton {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
        });
        assert_eq!(d, Some(Dispatch::MouseDown { x: 0, y: 0, button: MouseButton::Left }));
    }
}

use crate::canvas::Canvas;
use crate::input::{KeyPress, MouseButton};
use crate::time::TickTime;

use super::ctx::ShellCtx;

/// Application callbacks driven by a [`Display`](crate::display::Display).
///
/// All callbacks run on the UI thread (the thread that created the display) and
/// never overlap. Panics are not caught by the shell.
pub trait App {
    /// Fixed-rate logic update. Called once per scheduler firing, before the
    /// repaint request issued for that firing.
    fn on_tick(&mut self, time: TickTime, ctx: &mut ShellCtx<'_>);

    /// Renders the current state. Called from the platform's redraw path only,
    /// at most once per (coalesced) repaint request.
    fn on_draw(&mut self, canvas: &mut Canvas);

    /// Called for every key-down, including auto-repeat.
    fn on_key(&mut self, key: KeyPress, ctx: &mut ShellCtx<'_>) {
        let _ = (key, ctx);
    }

    /// Called for every mouse button press, at canvas-local pixel coordinates.
    ///
    /// The position is the last pointer motion seen. A press that arrives before
    /// any motion (e.g. a freshly shown window under a still pointer) reports
    /// `(0, 0)`; check [`InputState::pointer_pixel`](crate::input::InputState::pointer_pixel)
    /// through `ctx.input()` to tell it apart from a real click at the origin.
    fn on_mouse_down(&mut self, x: i32, y: i32, button: MouseButton, ctx: &mut ShellCtx<'_>) {
        let _ = (x, y, button, ctx);
    }
}

use crate::input::InputState;

/// Deferred window/display operation requested from a callback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Repaint,
    VanishCursor,
    RestoreCursor,
    RequestFocus,
    Stop,
}

/// Context passed to `App` callbacks.
///
/// Commands are buffered and applied in order after the current callback returns.
pub struct ShellCtx<'a> {
    input: &'a InputState,
    fps: u32,
    canvas_size: (u32, u32),
    commands: &'a mut Vec<Command>,
}

impl<'a> ShellCtx<'a> {
    pub(crate) fn new(
        input: &'a InputState,
        fps: u32,
        canvas_size: (u32, u32),
        commands: &'a mut Vec<Command>,
    ) -> Self {
        Self {
            input,
            fps,
            canvas_size,
            commands,
        }
    }

    /// Held keys, held buttons, pointer position and focus.
    pub fn input(&self) -> &InputState {
        self.input
    }

    /// Configured tick rate.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Canvas size in physical pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    /// Requests an extra redraw outside the tick cadence.
    pub fn repaint(&mut self) {
        self.commands.push(Command::Repaint);
    }

    /// Replaces the cursor over the window with a transparent 16x16 image.
    pub fn vanish_cursor(&mut self) {
        self.commands.push(Command::VanishCursor);
    }

    /// Restores the default cursor after [`vanish_cursor`](Self::vanish_cursor).
    pub fn restore_cursor(&mut self) {
        self.commands.push(Command::RestoreCursor);
    }

    pub fn request_focus(&mut self) {
        self.commands.push(Command::RequestFocus);
    }

    /// Stops the display: no further ticks, the window is released.
    pub fn stop(&mut self) {
        self.commands.push(Command::Stop);
    }
}

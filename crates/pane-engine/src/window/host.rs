/// Window operations the display driver depends on.
///
/// Implemented by the native window; tests substitute a recording fake so the
/// tick/draw/input logic runs without a display server.
pub(crate) trait WindowHost {
    /// Makes the window visible.
    fn show(&mut self);

    /// Queues one redraw. Must not draw synchronously and must not block.
    ///
    /// Requests made before the platform services the redraw are merged.
    fn repaint(&mut self);

    /// Asks the OS for input focus. Fire-and-forget.
    fn request_focus(&mut self);

    /// Swaps between the blank cursor and the default one.
    fn set_cursor_hidden(&mut self, hidden: bool);

    /// Current canvas size in physical pixels.
    fn canvas_size(&self) -> (u32, u32);
}

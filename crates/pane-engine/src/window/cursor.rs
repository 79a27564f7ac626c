use winit::window::{CustomCursor, CustomCursorSource};

use crate::error::ShellError;

/// Side length of the blank cursor image, in pixels.
pub const BLANK_CURSOR_SIZE: u16 = 16;

/// RGBA8 pixels of the blank cursor: `16 x 16`, every byte zero (fully transparent).
pub fn blank_cursor_rgba() -> Vec<u8> {
    let side = usize::from(BLANK_CURSOR_SIZE);
    vec![0; side * side * 4]
}

/// Cursor source used by `vanish_cursor`, hotspot at the top-left corner.
pub(crate) fn blank_cursor_source() -> Result<CustomCursorSource, ShellError> {
    CustomCursor::from_rgba(blank_cursor_rgba(), BLANK_CURSOR_SIZE, BLANK_CURSOR_SIZE, 0, 0)
        .map_err(|e| ShellError::window(format!("blank cursor rejected: {e}")))
}

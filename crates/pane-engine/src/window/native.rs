//! Native window + software presentation surface.
//!
//! # Drop order
//!
//! Fields drop in declaration order: `surface` goes before `_context`, and both
//! before `window`, which the surface borrows through an `Arc`.

use std::num::NonZeroU32;
use std::sync::Arc;

use softbuffer::{Context, SoftBufferError, Surface};
use winit::event_loop::{ActiveEventLoop, OwnedDisplayHandle};
use winit::window::{CursorIcon, CustomCursor, Window as WinitWindow, WindowId};

use crate::canvas::Canvas;
use crate::error::ShellError;

use super::config::WindowConfig;
use super::cursor::blank_cursor_source;
use super::geometry::{ScreenInfo, WindowGeometry};
use super::host::WindowHost;

/// The one native window owned by a display.
pub(crate) struct NativeWindow {
    surface: Surface<OwnedDisplayHandle, Arc<WinitWindow>>,
    _context: Context<OwnedDisplayHandle>,
    window: Arc<WinitWindow>,

    blank_cursor: Option<CustomCursor>,
    cursor_hidden: bool,
    geometry: WindowGeometry,
    canvas: Canvas,
}

impl NativeWindow {
    /// Creates the window hidden, with its surface and canvas.
    pub(crate) fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, ShellError> {
        let screen = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next())
            .map(|m| ScreenInfo::from_monitor(&m));
        let geometry = WindowGeometry::resolve(config, screen)?;

        let window = event_loop
            .create_window(geometry.attributes(&config.title))
            .map_err(|e| ShellError::window(e.to_string()))?;
        let window = Arc::new(window);

        let context = Context::new(event_loop.owned_display_handle())
            .map_err(|e| ShellError::window(format!("softbuffer context: {e}")))?;
        let surface = Surface::new(&context, window.clone())
            .map_err(|e| ShellError::window(format!("softbuffer surface: {e}")))?;

        let blank_cursor = match blank_cursor_source() {
            Ok(source) => Some(event_loop.create_custom_cursor(source)),
            Err(e) => {
                log::warn!("{e}; vanish_cursor will fall back to hiding the cursor");
                None
            }
        };

        let size = window.inner_size();
        log::debug!(
            "created window '{}' {}x{} (requested {}x{}, decorated={})",
            config.title,
            size.width,
            size.height,
            geometry.size.0,
            geometry.size.1,
            geometry.decorated,
        );

        Ok(Self {
            surface,
            _context: context,
            window,
            blank_cursor,
            cursor_hidden: false,
            geometry,
            canvas: Canvas::new(size.width, size.height),
        })
    }

    pub(crate) fn id(&self) -> WindowId {
        self.window.id()
    }

    pub(crate) fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    /// Lets `draw` paint the canvas, then presents it.
    ///
    /// Skipped entirely while the window has a zero-sized client area (minimized).
    pub(crate) fn present<F>(&mut self, draw: F) -> Result<(), SoftBufferError>
    where
        F: FnOnce(&mut Canvas),
    {
        let size = self.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };

        self.canvas.resize(size.width, size.height);
        draw(&mut self.canvas);

        self.surface.resize(w, h)?;
        let mut buffer = self.surface.buffer_mut()?;
        if buffer.len() != self.canvas.pixels().len() {
            log::warn!(
                "surface buffer has {} pixels, canvas has {}; frame skipped",
                buffer.len(),
                self.canvas.pixels().len()
            );
            return Ok(());
        }
        buffer.copy_from_slice(self.canvas.pixels());

        self.window.pre_present_notify();
        buffer.present()
    }
}

impl WindowHost for NativeWindow {
    fn show(&mut self) {
        self.window.set_visible(true);
    }

    fn repaint(&mut self) {
        self.window.request_redraw();
    }

    fn request_focus(&mut self) {
        self.window.focus_window();
    }

    fn set_cursor_hidden(&mut self, hidden: bool) {
        if hidden == self.cursor_hidden {
            return;
        }
        self.cursor_hidden = hidden;

        if hidden {
            match &self.blank_cursor {
                Some(blank) => self.window.set_cursor(blank.clone()),
                None => self.window.set_cursor_visible(false),
            }
        } else {
            self.window.set_cursor(CursorIcon::Default);
            self.window.set_cursor_visible(true);
        }
    }

    fn canvas_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }
}

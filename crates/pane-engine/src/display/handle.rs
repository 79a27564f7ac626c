use std::fmt;

use winit::event_loop::EventLoopProxy;

/// Request marshaled onto the UI thread through the event loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ShellEvent {
    Repaint,
    Stop,
}

/// Cloneable, `Send` handle for driving a display from other threads.
///
/// Requests are queued on the display's event loop and applied on the UI thread
/// the next time the loop is driven.
#[derive(Clone)]
pub struct DisplayHandle {
    proxy: EventLoopProxy<ShellEvent>,
}

impl fmt::Debug for DisplayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayHandle").finish_non_exhaustive()
    }
}

impl DisplayHandle {
    pub(crate) fn new(proxy: EventLoopProxy<ShellEvent>) -> Self {
        Self { proxy }
    }

    /// Queues an extra redraw. Returns `false` once the event loop is gone.
    pub fn repaint(&self) -> bool {
        self.proxy.send_event(ShellEvent::Repaint).is_ok()
    }

    /// Queues a stop. Returns `false` once the event loop is gone.
    pub fn stop(&self) -> bool {
        self.proxy.send_event(ShellEvent::Stop).is_ok()
    }
}

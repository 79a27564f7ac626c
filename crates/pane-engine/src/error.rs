use std::fmt;

/// Errors surfaced while constructing or driving a [`Display`](crate::display::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Rejected configuration (zero fps, zero width/height).
    ///
    /// Always raised before any native resource is allocated.
    Configuration(String),

    /// The platform refused to provide an event loop, window or surface.
    WindowCreation(String),

    /// `start()` / `run()` was called on a display that already left `Created`.
    AlreadyStarted,

    /// The event loop terminated with a platform error.
    EventLoop(String),
}

impl ShellError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub(crate) fn window(msg: impl Into<String>) -> Self {
        Self::WindowCreation(msg.into())
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "invalid display configuration: {msg}"),
            Self::WindowCreation(msg) => write!(f, "window creation failed: {msg}"),
            Self::AlreadyStarted => f.write_str("display was already started"),
            Self::EventLoop(msg) => write!(f, "event loop error: {msg}"),
        }
    }
}

impl std::error::Error for ShellError {}

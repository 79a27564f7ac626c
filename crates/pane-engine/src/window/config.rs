use crate::error::ShellError;

/// How the window occupies the screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowMode {
    /// Fixed inner size in physical pixels, decorated, not resizable.
    Windowed { width: u32, height: u32 },

    /// Sized to the primary monitor, no decorations, fixed position.
    FullscreenBorderless,
}

/// Window configuration. Immutable once handed to a display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub mode: WindowMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "pane".to_string(),
            mode: WindowMode::Windowed { width: 800, height: 600 },
        }
    }
}

impl WindowConfig {
    pub fn windowed(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            mode: WindowMode::Windowed { width, height },
        }
    }

    pub fn fullscreen(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mode: WindowMode::FullscreenBorderless,
        }
    }

    /// Builds a config from optional dimensions.
    ///
    /// Both dimensions are needed for a windowed mode; if either is absent the
    /// window is fullscreen borderless.
    pub fn from_parts(title: impl Into<String>, width: Option<u32>, height: Option<u32>) -> Self {
        match (width, height) {
            (Some(width), Some(height)) => Self::windowed(title, width, height),
            _ => Self::fullscreen(title),
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.mode == WindowMode::FullscreenBorderless
    }

    /// Rejects zero dimensions.
    pub fn validate(&self) -> Result<(), ShellError> {
        if let WindowMode::Windowed { width, height } = self.mode {
            if width == 0 || height == 0 {
                return Err(ShellError::config(format!(
                    "window dimensions must be positive, got {width}x{height}"
                )));
            }
        }
        Ok(())
    }
}

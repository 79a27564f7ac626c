use std::time::Duration;

use crate::error::ShellError;
use crate::time::tick_interval;
use crate::window::WindowConfig;

/// Display configuration: the window plus the tick rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub window: WindowConfig,
    /// Ticks per second; must be non-zero.
    pub fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            fps: 60,
        }
    }
}

impl DisplayConfig {
    pub fn new(window: WindowConfig, fps: u32) -> Self {
        Self { window, fps }
    }

    pub fn windowed(title: impl Into<String>, width: u32, height: u32, fps: u32) -> Self {
        Self::new(WindowConfig::windowed(title, width, height), fps)
    }

    pub fn fullscreen(title: impl Into<String>, fps: u32) -> Self {
        Self::new(WindowConfig::fullscreen(title), fps)
    }

    /// Set the window title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the tick rate.
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Interval between ticks (`1000 / fps` whole milliseconds).
    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.fps.max(1))
    }

    pub fn validate(&self) -> Result<(), ShellError> {
        if self.fps == 0 {
            return Err(ShellError::config("fps must be greater than zero"));
        }
        self.window.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fps_is_a_configuration_error() {
        let err = DisplayConfig::windowed("T", 800, 600, 0).validate().unwrap_err();
        assert_eq!(err, ShellError::Configuration("fps must be greater than zero".into()));
    }

    #[test]
    fn window_problems_surface_through_display_validation() {
        assert!(DisplayConfig::windowed("T", 0, 600, 60).validate().is_err());
        assert!(DisplayConfig::fullscreen("T", 30).validate().is_ok());
    }

    #[test]
    fn tick_interval_follows_fps() {
        assert_eq!(DisplayConfig::windowed("T", 1, 1, 30).tick_interval(), Duration::from_millis(33));
        assert_eq!(DisplayConfig::default().fps(1).tick_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn builder_setters_replace_fields() {
        let cfg = DisplayConfig::default().title("Game").fps(24);
        assert_eq!(cfg.window.title, "Game");
        assert_eq!(cfg.fps, 24);
    }
}

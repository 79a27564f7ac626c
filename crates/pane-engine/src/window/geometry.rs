use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::monitor::MonitorHandle;
use winit::window::WindowAttributes;

use crate::error::ShellError;

use super::config::{WindowConfig, WindowMode};

/// Primary monitor placement, in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenInfo {
    pub position: (i32, i32),
    pub size: (u32, u32),
}

impl ScreenInfo {
    pub(crate) fn from_monitor(monitor: &MonitorHandle) -> Self {
        let pos = monitor.position();
        let size = monitor.size();
        Self {
            position: (pos.x, pos.y),
            size: (size.width, size.height),
        }
    }
}

/// Window placement resolved from a [`WindowConfig`] and the primary screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowGeometry {
    /// Inner (canvas) size in physical pixels.
    pub size: (u32, u32),
    /// Outer top-left position; `None` leaves placement to the platform.
    ///
    /// Computed from the inner size, so decorations shift the frame off center.
    pub position: Option<(i32, i32)>,
    pub decorated: bool,
    pub resizable: bool,
}

impl WindowGeometry {
    /// Resolves the geometry.
    ///
    /// Windowed mode is centered on `screen` when one is known. Fullscreen
    /// borderless needs a screen with a non-zero resolution.
    pub fn resolve(config: &WindowConfig, screen: Option<ScreenInfo>) -> Result<Self, ShellError> {
        config.validate()?;

        match config.mode {
            WindowMode::Windowed { width, height } => Ok(Self {
                size: (width, height),
                position: screen.map(|s| centered(s, (width, height))),
                decorated: true,
                resizable: false,
            }),

            WindowMode::FullscreenBorderless => {
                let screen = screen
                    .ok_or_else(|| ShellError::window("no monitor available for fullscreen"))?;
                if screen.size.0 == 0 || screen.size.1 == 0 {
                    return Err(ShellError::window(format!(
                        "monitor reports an empty resolution {}x{}",
                        screen.size.0, screen.size.1
                    )));
                }
                Ok(Self {
                    size: screen.size,
                    position: Some(screen.position),
                    decorated: false,
                    resizable: false,
                })
            }
        }
    }

    /// Window attributes for this geometry. The window starts hidden.
    pub(crate) fn attributes(&self, title: &str) -> WindowAttributes {
        let mut attrs = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(self.size.0, self.size.1))
            .with_resizable(self.resizable)
            .with_decorations(self.decorated)
            .with_visible(false);

        if let Some((x, y)) = self.position {
            attrs = attrs.with_position(PhysicalPosition::new(x, y));
        }
        attrs
    }
}

/// Top-left that centers a `size` box on `screen`.
///
/// `size` is the inner (canvas) size while the result is applied as the outer
/// position, so a decorated window sits lower than true center by its title bar
/// height. Frame insets are unknown until the window is mapped.
fn centered(screen: ScreenInfo, size: (u32, u32)) -> (i32, i32) {
    let offset = |screen_len: u32, len: u32| (i64::from(screen_len) - i64::from(len)) / 2;
    let x = i64::from(screen.position.0) + offset(screen.size.0, size.0);
    let y = i64::from(screen.position.1) + offset(screen.size.1, size.1);
    (clamp_i32(x), clamp_i32(y))
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

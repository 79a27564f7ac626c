//! Native window.
//!
//! Owns the `winit` window and its softbuffer presentation surface, resolves the
//! window geometry from configuration, and implements the window operations the
//! display driver uses (show, repaint, focus, cursor).

mod config;
mod cursor;
mod geometry;
pub(crate) mod host;
pub(crate) mod native;

pub use config::{WindowConfig, WindowMode};
pub use cursor::{blank_cursor_rgba, BLANK_CURSOR_SIZE};
pub use geometry::{ScreenInfo, WindowGeometry};

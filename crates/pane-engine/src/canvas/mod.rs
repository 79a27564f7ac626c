//! Software canvas handed to `App::on_draw`.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes)
//! - a CPU pixel buffer matching the window's inner size
//! - primitive drawing: fills, lines, bitmap blits, text
//!
//! The canvas persists between draws; whatever the application leaves in it is
//! presented as-is.

mod canvas;
mod color;
mod text;

pub use canvas::Canvas;
pub use color::Color;
pub use text::{Font, FontLoadError};

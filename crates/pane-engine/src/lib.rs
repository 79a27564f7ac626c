//! Pane engine crate.
//!
//! A minimal windowing shell: one native window (fixed-size or borderless
//! fullscreen), a fixed-rate tick loop, a software canvas for drawing, keyboard
//! and mouse callbacks, and an image decoder.
//!
//! Applications implement [`App`] and hand it to a [`Display`]:
//!
//! ```rust,ignore
//! use pane_engine::{App, Canvas, Color, Display, ShellCtx, TickTime};
//!
//! struct Game;
//!
//! impl App for Game {
//!     fn on_tick(&mut self, _time: TickTime, _ctx: &mut ShellCtx<'_>) {}
//!     fn on_draw(&mut self, canvas: &mut Canvas) {
//!         canvas.clear(Color::BLACK);
//!     }
//! }
//!
//! Display::windowed(640, 480, "Game", 60, Game)?.run()?;
//! ```

pub mod bitmap;
pub mod canvas;
pub mod core;
pub mod display;
pub mod error;
pub mod input;
pub mod logging;
pub mod time;
pub mod window;

pub use bitmap::{load_image, load_image_bytes, load_image_file, Bitmap, DecodeError};
pub use canvas::{Canvas, Color, Font, FontLoadError};
pub use crate::core::{App, ShellCtx};
pub use display::{Display, DisplayConfig, DisplayHandle, DisplayState, DisplayStatus};
pub use error::ShellError;
pub use input::{InputState, Key, KeyPress, MouseButton};
pub use time::TickTime;
pub use window::{WindowConfig, WindowMode};

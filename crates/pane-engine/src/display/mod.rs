//! Display: window + fixed-rate tick loop + application callbacks.
//!
//! Owns the `winit` event loop. The thread that builds the [`Display`] is the UI
//! thread: it owns the window and runs every `App` callback. The tick timer is a
//! deadline on that same loop (`ControlFlow::WaitUntil`), so ticks, draws and
//! input callbacks never overlap.

mod config;
mod driver;
mod handle;
mod shell;

pub use config::DisplayConfig;
pub use driver::DisplayState;
pub use handle::DisplayHandle;
pub use shell::{Display, DisplayStatus};

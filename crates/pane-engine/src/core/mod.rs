//! Core application contract.
//!
//! This module defines the interface between the display (platform loop) and
//! application code: the [`App`] callbacks and the [`ShellCtx`] handed to them.

mod app;
mod ctx;

pub use app::App;
pub use ctx::ShellCtx;
pub(crate) use ctx::Command;

//! Time subsystem.
//!
//! Provides the fixed-rate tick schedule and per-tick timing snapshots without
//! coupling to the event loop. Intended usage:
//! - one `TickSchedule` per display, armed when the display starts
//! - call `TickClock::tick()` once per scheduler firing to obtain `TickTime`

mod schedule;
mod tick_clock;

pub use schedule::{tick_interval, TickSchedule};
pub use tick_clock::{TickClock, TickTime};

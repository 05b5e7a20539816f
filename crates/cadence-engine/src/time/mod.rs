//! Time subsystem.
//!
//! Clock sources for the frame pacer. Time is reported as `f64` seconds since
//! an arbitrary epoch so that pacing math does not depend on `Instant`.
//! - `MonotonicClock` for real loops
//! - `ManualClock` for deterministic tests and replay

mod clock;

pub use clock::{Clock, ManualClock, MonotonicClock};

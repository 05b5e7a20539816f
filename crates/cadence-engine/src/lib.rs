//! Cadence engine crate.
//!
//! Frame pacing and FPS estimation, plus the thin platform + GPU runtime the
//! benchmark sample runs on.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;
pub mod pacer;

pub mod logging;

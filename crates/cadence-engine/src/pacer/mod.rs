//! Frame pacing and FPS estimation.
//!
//! `FramePacer::tick` is the body of the external loop: it decides whether the
//! content-refresh and render steps run this iteration, samples the clock into
//! a circular FPS buffer, and periodically publishes the buffer mean.

mod frame_pacer;
mod samples;
mod state;

pub use frame_pacer::{format_fps, FramePacer, PacerConfig, TickReport, DEFAULT_CAPACITY};
pub use samples::FrameSampleBuffer;
pub use state::{PacerCommand, PacingState, StepMode};

//! Core engine-facing contracts.
//!
//! Two seams live here:
//! - `App`/`FrameCtx`: the interface between the window runtime and the
//!   application driving it
//! - the collaborator traits the frame pacer calls out to once per tick

mod app;
mod ctx;
mod hooks;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub use hooks::{ContentRefresher, DisplayEngine, DisplaySink, FrameHooks, RenderSink};

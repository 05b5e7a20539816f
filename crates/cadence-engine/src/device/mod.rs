//! GPU device + surface management.
//!
//! Just enough wgpu to give the benchmark a real frame lifecycle:
//! - create Instance/Adapter/Device/Queue and configure the window surface
//! - acquire a frame, clear it, submit and present it
//! - map surface errors to a recovery action

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;

/// Clear color used by `Gpu::clear`.
pub type ClearColor = wgpu::Color;

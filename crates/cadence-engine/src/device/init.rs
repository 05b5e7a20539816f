/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode. `Fifo` caps the benchmark at the display rate;
    /// `Immediate`/`Mailbox` let it run uncapped where supported.
    pub present_mode: wgpu::PresentMode,

    /// Desired maximum frame latency (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl GpuInit {
    /// Settings for measuring uncapped frame rates.
    ///
    /// Falls back to the surface's first supported mode when `Immediate` is
    /// unavailable.
    pub fn uncapped() -> Self {
        Self {
            present_mode: wgpu::PresentMode::Immediate,
            desired_maximum_frame_latency: 1,
            ..Self::default()
        }
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
        }
    }
}

use clap::Parser;

use cadence_engine::device::GpuInit;
use cadence_engine::logging::LoggingConfig;
use cadence_engine::pacer::{PacerConfig, DEFAULT_CAPACITY};
use cadence_engine::window::RuntimeConfig;

use crate::content::{RowGenerator, DEFAULT_ROWS};

/// Frame pacing benchmark: regenerates a document region every frame and
/// reports a rolling FPS mean.
///
/// Keys (windowed): Space toggles rendering, Down renders one frame, Enter
/// toggles content refresh, Right refreshes once, F8 toggles diagnostics,
/// Escape quits.
#[derive(Debug, Clone, Parser)]
#[command(name = "cadence-bench", version)]
pub struct Args {
    /// Run without a window for a fixed number of frames.
    #[arg(long)]
    pub headless: bool,

    /// Frames to run in headless mode.
    #[arg(long, default_value_t = 2000)]
    pub frames: u64,

    /// FPS samples averaged per published value.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Rows regenerated per content refresh.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Seed for row generation; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 1800.0)]
    pub width: f64,

    #[arg(long, default_value_t = 1000.0)]
    pub height: f64,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long = "log")]
    pub log_filter: Option<String>,

    /// Cap the frame rate at the display refresh rate.
    #[arg(long)]
    pub vsync: bool,
}

impl Args {
    pub fn logging(&self) -> LoggingConfig {
        match &self.log_filter {
            Some(filter) => LoggingConfig::with_filter(filter.clone()),
            None => LoggingConfig::default(),
        }
    }

    pub fn pacer(&self) -> PacerConfig {
        PacerConfig { capacity: self.capacity }
    }

    pub fn generator(&self) -> RowGenerator {
        match self.seed {
            Some(seed) => RowGenerator::seeded(seed, self.rows),
            None => RowGenerator::from_entropy(self.rows),
        }
    }

    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: "Benchmark Sample".to_string(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn gpu(&self) -> GpuInit {
        if self.vsync { GpuInit::default() } else { GpuInit::uncapped() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["cadence-bench"]);
        assert!(!args.headless);
        assert_eq!(args.pacer().capacity, 200);
        assert_eq!(args.rows, 50);
        assert_eq!(args.runtime().width, 1800.0);
        assert_eq!(args.gpu().present_mode, GpuInit::uncapped().present_mode);
    }

    #[test]
    fn headless_flags() {
        let args = Args::parse_from([
            "cadence-bench", "--headless", "--frames", "500", "--capacity", "64",
            "--seed", "9", "--log", "debug", "--vsync",
        ]);
        assert!(args.headless);
        assert_eq!(args.frames, 500);
        assert_eq!(args.pacer().capacity, 64);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.logging().env_filter.as_deref(), Some("debug"));
        assert_eq!(args.gpu().present_mode, GpuInit::default().present_mode);
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

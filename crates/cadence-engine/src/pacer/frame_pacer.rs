use anyhow::{Context, Result};

use crate::core::{AppControl, FrameHooks};
use crate::time::{Clock, MonotonicClock};

use super::samples::FrameSampleBuffer;
use super::state::{PacerCommand, PacingState};

/// Default number of FPS samples averaged per published value.
pub const DEFAULT_CAPACITY: usize = 200;

/// Pacer configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PacerConfig {
    /// Size of the FPS ring. A publish happens every `capacity / 8 + 1` ticks.
    pub capacity: usize,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY }
    }
}

/// What a single tick did.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickReport {
    pub refreshed: bool,
    pub rendered: bool,
    /// Seconds since the previous tick.
    pub dt: f64,
    /// Instantaneous sample stored this tick (`1 / dt`, unguarded).
    pub fps: f64,
    /// Mean that was published this tick, if any.
    pub published: Option<f64>,
}

/// Status line sent to the display sink.
pub fn format_fps(mean: f64) -> String {
    format!("FPS: {mean:.6}")
}

/// Frame pacer and rolling FPS estimator.
///
/// Owns the run/step toggles, the clock state and the sample ring. One value
/// per loop; not shared between threads.
#[derive(Debug)]
pub struct FramePacer<C: Clock = MonotonicClock> {
    clock: C,
    state: PacingState,
    samples: FrameSampleBuffer,
    previous_timestamp: f64,
    frame_counter: usize,
    diagnostics: bool,
}

impl FramePacer<MonotonicClock> {
    /// Pacer over a fresh monotonic clock.
    pub fn monotonic(config: PacerConfig) -> Result<Self> {
        Self::new(config, MonotonicClock::new())
    }
}

impl<C: Clock> FramePacer<C> {
    pub fn new(config: PacerConfig, clock: C) -> Result<Self> {
        let samples = FrameSampleBuffer::new(config.capacity)
            .context("invalid pacer configuration")?;

        Ok(Self {
            clock,
            state: PacingState::default(),
            samples,
            previous_timestamp: 0.0,
            frame_counter: 0,
            diagnostics: false,
        })
    }

    /// Replaces the initial toggles.
    pub fn with_state(mut self, state: PacingState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &PacingState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PacingState {
        &mut self.state
    }

    pub fn samples(&self) -> &FrameSampleBuffer {
        &self.samples
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Ticks since the last publish.
    pub fn frame_counter(&self) -> usize {
        self.frame_counter
    }

    pub fn previous_timestamp(&self) -> f64 {
        self.previous_timestamp
    }

    /// Current mean over the whole ring.
    pub fn mean_fps(&self) -> f64 {
        self.samples.mean()
    }

    pub fn diagnostics(&self) -> bool {
        self.diagnostics
    }

    /// Number of ticks after which a publish becomes due.
    fn publish_threshold(&self) -> usize {
        self.samples.capacity() / 8
    }

    /// Applies an operator command between ticks.
    pub fn apply(&mut self, command: PacerCommand) -> AppControl {
        match command {
            PacerCommand::ToggleRender
            | PacerCommand::StepRender
            | PacerCommand::StepUpdate
            | PacerCommand::ToggleUpdate => {
                self.state.apply(command);
                log::debug!(
                    "{command:?}: render {:?}, update {:?}",
                    self.state.render_mode(),
                    self.state.update_mode()
                );
                AppControl::Continue
            }
            PacerCommand::ToggleDiagnostics => {
                self.diagnostics = !self.diagnostics;
                log::info!("pacer diagnostics {}", if self.diagnostics { "on" } else { "off" });
                AppControl::Continue
            }
            PacerCommand::Exit => AppControl::Exit,
        }
    }

    /// Runs one iteration of the loop body.
    pub fn tick<H>(&mut self, hooks: &mut H) -> TickReport
    where
        H: FrameHooks + ?Sized,
    {
        let refreshed = self.state.take_update_step();
        if refreshed {
            hooks.refresh();
        }

        let rendered = self.state.take_render_step();
        if rendered {
            hooks.layout_and_update();
            hooks.prepare_buffer();
            hooks.render();
            hooks.present_buffer();
        }

        let t = self.clock.now();
        let dt = t - self.previous_timestamp;
        self.previous_timestamp = t;
        self.frame_counter += 1;

        // dt == 0 stores +inf and poisons the mean until the slot is overwritten.
        let fps = 1.0 / dt;
        let slot = self.samples.push(fps);
        if !fps.is_finite() {
            log::debug!("non-finite fps sample {fps} in slot {slot} (dt = {dt})");
        }
        log::trace!("tick: dt {dt:.6}s, fps {fps:.3}, slot {slot}");

        let mut published = None;
        if self.frame_counter > self.publish_threshold() {
            if let Some(sink) = hooks.display_sink() {
                let mean = self.samples.mean();
                self.frame_counter = 0;
                sink.publish(&format_fps(mean));
                published = Some(mean);

                log::debug!("published mean fps {mean:.3}");
                if self.diagnostics {
                    log::info!(
                        "fps samples: min {:.3}, max {:.3}, mean {:.3} over {}",
                        self.samples.min(),
                        self.samples.max(),
                        mean,
                        self.samples.capacity()
                    );
                }
            }
        }

        TickReport { refreshed, rendered, dt, fps, published }
    }
}

use anyhow::Result;

use cadence_engine::core::{
    ContentRefresher, DisplayEngine, DisplaySink, FrameHooks, RenderSink,
};
use cadence_engine::pacer::FramePacer;
use cadence_engine::time::Clock;

use crate::document::BenchDocument;

/// Viewport used for layout when no window exists.
pub const HEADLESS_VIEWPORT: (f32, f32) = (1800.0, 1000.0);

/// Frame hooks without a window: layout runs for real, the buffer lifecycle is
/// only counted.
#[derive(Debug)]
pub struct HeadlessFrame<'d> {
    document: &'d mut BenchDocument,
    pub prepared: u64,
    pub rendered: u64,
    pub presented: u64,
    pub publishes: Vec<String>,
}

impl<'d> HeadlessFrame<'d> {
    pub fn new(document: &'d mut BenchDocument) -> Self {
        Self {
            document,
            prepared: 0,
            rendered: 0,
            presented: 0,
            publishes: Vec::new(),
        }
    }
}

impl ContentRefresher for HeadlessFrame<'_> {
    fn refresh(&mut self) {
        self.document.refresh();
    }
}

impl DisplayEngine for HeadlessFrame<'_> {
    fn layout_and_update(&mut self) {
        self.document.lay_out(HEADLESS_VIEWPORT);
    }

    fn render(&mut self) {
        self.rendered += 1;
    }
}

impl RenderSink for HeadlessFrame<'_> {
    fn prepare_buffer(&mut self) {
        self.prepared += 1;
    }

    fn present_buffer(&mut self) {
        self.presented += 1;
    }
}

impl DisplaySink for HeadlessFrame<'_> {
    fn publish(&mut self, text: &str) {
        log::info!("{text}");
        self.document.set_fps_text(text);
        self.publishes.push(text.to_string());
    }
}

impl FrameHooks for HeadlessFrame<'_> {
    fn display_sink(&mut self) -> Option<&mut dyn DisplaySink> {
        Some(self)
    }
}

/// Summary of a headless run.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSummary {
    pub ticks: u64,
    pub refreshes: u64,
    pub buffers_prepared: u64,
    pub frames_rendered: u64,
    pub frames_presented: u64,
    pub publishes: Vec<String>,
    pub final_mean_fps: f64,
}

/// Ticks `pacer` `frames` times against `document`.
pub fn run_headless<C: Clock>(
    pacer: &mut FramePacer<C>,
    document: &mut BenchDocument,
    frames: u64,
) -> Result<HeadlessSummary> {
    anyhow::ensure!(frames > 0, "headless run needs at least one frame");

    let start_generation = document.generation();
    let mut hooks = HeadlessFrame::new(document);

    for _ in 0..frames {
        pacer.tick(&mut hooks);
    }

    let summary = HeadlessSummary {
        ticks: frames,
        refreshes: hooks.document.generation() - start_generation,
        buffers_prepared: hooks.prepared,
        frames_rendered: hooks.rendered,
        frames_presented: hooks.presented,
        publishes: std::mem::take(&mut hooks.publishes),
        final_mean_fps: pacer.mean_fps(),
    };

    log::info!(
        "headless run finished: {} ticks, {} refreshes, {} frames ({} rendered), {} publishes, mean {:.3} fps",
        summary.ticks,
        summary.refreshes,
        summary.frames_presented,
        summary.frames_rendered,
        summary.publishes.len(),
        summary.final_mean_fps
    );
    let layout = document.layout();
    log::debug!(
        "last layout: {} rows visible, {:.0} px of content, {} bytes of row markup, {} buffers prepared",
        layout.visible_rows,
        layout.content_height,
        document.performance_markup().len(),
        summary.buffers_prepared
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_engine::pacer::{PacerCommand, PacerConfig};
    use cadence_engine::time::ManualClock;

    use crate::content::RowGenerator;

    fn document() -> BenchDocument {
        BenchDocument::new("Benchmark sample", 100.0, RowGenerator::seeded(11, 50))
    }

    fn pacer(step: f64) -> FramePacer<ManualClock> {
        FramePacer::new(PacerConfig::default(), ManualClock::with_step(step)).unwrap()
    }

    #[test]
    fn steady_run_publishes_into_document() {
        let mut doc = document();
        let mut p = pacer(0.01);

        let summary = run_headless(&mut p, &mut doc, 208).unwrap();

        assert_eq!(summary.ticks, 208);
        assert_eq!(summary.refreshes, 208);
        assert_eq!(summary.frames_rendered, 208);
        assert_eq!(summary.publishes.len(), 8);
        assert_eq!(summary.publishes.last().map(String::as_str), Some("FPS: 100.000000"));
        assert_eq!(doc.fps_text(), "FPS: 100.000000");
        assert_eq!(doc.layout().visible_rows, 23);
    }

    #[test]
    fn paused_render_still_refreshes_and_samples() {
        let mut doc = document();
        let mut p = pacer(0.02);
        p.apply(PacerCommand::ToggleRender);
        p.state_mut().single_loop = false;

        let summary = run_headless(&mut p, &mut doc, 30).unwrap();

        assert_eq!(summary.frames_rendered, 0);
        assert_eq!(summary.refreshes, 30);
        assert_eq!(summary.publishes.len(), 1);
    }

    #[test]
    fn stepped_update_refreshes_once() {
        let mut doc = document();
        let mut p = pacer(0.01);
        p.apply(PacerCommand::StepUpdate);

        let summary = run_headless(&mut p, &mut doc, 10).unwrap();
        assert_eq!(summary.refreshes, 1);
        assert_eq!(summary.frames_rendered, 10);
    }

    #[test]
    fn zero_frames_is_rejected() {
        let mut doc = document();
        assert!(run_headless(&mut pacer(0.01), &mut doc, 0).is_err());
    }
}

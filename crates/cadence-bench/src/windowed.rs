use cadence_engine::core::{
    App, AppControl, ContentRefresher, DisplayEngine, DisplaySink, FrameCtx, FrameHooks,
    RenderSink,
};
use cadence_engine::device::{ClearColor, GpuFrame, SurfaceErrorAction};
use cadence_engine::input::{KeyBindings, KeyEvent};
use cadence_engine::pacer::FramePacer;
use cadence_engine::time::Clock;

use crate::document::BenchDocument;

/// Windowed benchmark: one pacer tick per redraw.
pub struct BenchApp<C: Clock> {
    pacer: FramePacer<C>,
    bindings: KeyBindings,
    document: BenchDocument,
}

impl<C: Clock> BenchApp<C> {
    pub fn new(pacer: FramePacer<C>, bindings: KeyBindings, document: BenchDocument) -> Self {
        Self { pacer, bindings, document }
    }

    /// Resolves a key through the bindings and applies it to the pacer.
    pub fn handle_key(&mut self, event: KeyEvent) -> AppControl {
        match self.bindings.resolve(&event) {
            Some(command) => self.pacer.apply(command),
            None => AppControl::Continue,
        }
    }
}

impl<C: Clock> App for BenchApp<C> {
    fn on_key(&mut self, event: KeyEvent) -> AppControl {
        self.handle_key(event)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let mut hooks = WindowFrame {
            document: &mut self.document,
            ctx,
            frame: None,
            control: AppControl::Continue,
        };
        self.pacer.tick(&mut hooks);
        hooks.control
    }
}

/// Frame hooks backed by the window and its GPU surface.
struct WindowFrame<'f, 'a, 'w> {
    document: &'f mut BenchDocument,
    ctx: &'f mut FrameCtx<'a, 'w>,
    frame: Option<GpuFrame>,
    control: AppControl,
}

impl ContentRefresher for WindowFrame<'_, '_, '_> {
    fn refresh(&mut self) {
        self.document.refresh();
    }
}

impl DisplayEngine for WindowFrame<'_, '_, '_> {
    fn layout_and_update(&mut self) {
        self.document.lay_out(self.ctx.window.logical_size());
    }

    fn render(&mut self) {
        let Some(frame) = self.frame.as_mut() else {
            return;
        };
        let (r, g, b) = self.document.background();
        self.ctx.gpu.clear(frame, ClearColor { r, g, b, a: 1.0 });
    }
}

impl RenderSink for WindowFrame<'_, '_, '_> {
    fn prepare_buffer(&mut self) {
        match self.ctx.begin_frame() {
            Ok(frame) => self.frame = Some(frame),
            Err(SurfaceErrorAction::Fatal) => {
                log::error!("fatal surface error, shutting down");
                self.control = AppControl::Exit;
            }
            Err(action) => log::debug!("frame skipped: {action:?}"),
        }
    }

    fn present_buffer(&mut self) {
        if let Some(frame) = self.frame.take() {
            self.ctx.present(frame);
        }
    }
}

impl DisplaySink for WindowFrame<'_, '_, '_> {
    fn publish(&mut self, text: &str) {
        self.document.set_fps_text(text);
        self.ctx
            .window
            .set_title(&format!("{} | {}", self.document.title(), self.document.fps_text()));
    }
}

impl FrameHooks for WindowFrame<'_, '_, '_> {
    fn display_sink(&mut self) -> Option<&mut dyn DisplaySink> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_engine::input::Key;
    use cadence_engine::pacer::{PacerConfig, StepMode};
    use cadence_engine::time::ManualClock;

    use crate::content::RowGenerator;

    fn app() -> BenchApp<ManualClock> {
        let pacer = FramePacer::new(PacerConfig::default(), ManualClock::with_step(0.01)).unwrap();
        let document = BenchDocument::new("Benchmark sample", 100.0, RowGenerator::seeded(5, 4));
        BenchApp::new(pacer, KeyBindings::default(), document)
    }

    #[test]
    fn space_toggles_rendering() {
        let mut a = app();
        a.handle_key(KeyEvent::pressed(Key::Space));
        assert!(!a.pacer.state().run_loop);
        a.handle_key(KeyEvent::released(Key::Space));
        assert!(!a.pacer.state().run_loop);
        a.handle_key(KeyEvent::pressed(Key::Space));
        assert!(a.pacer.state().run_loop);
    }

    #[test]
    fn arrows_arm_single_steps() {
        let mut a = app();
        a.handle_key(KeyEvent::pressed(Key::ArrowDown));
        a.handle_key(KeyEvent::pressed(Key::ArrowRight));
        assert_eq!(a.pacer.state().render_mode(), StepMode::ArmedForOneStep);
        assert_eq!(a.pacer.state().update_mode(), StepMode::ArmedForOneStep);
    }

    #[test]
    fn escape_exits_and_unbound_keys_continue() {
        let mut a = app();
        assert_eq!(a.handle_key(KeyEvent::pressed(Key::ArrowUp)), AppControl::Continue);
        assert_eq!(a.handle_key(KeyEvent::pressed(Key::Escape)), AppControl::Exit);
    }

    #[test]
    fn f8_toggles_diagnostics() {
        let mut a = app();
        a.handle_key(KeyEvent::pressed(Key::F8));
        assert!(a.pacer.diagnostics());
    }
}

/// Regenerates the dynamic part of the document.
pub trait ContentRefresher {
    fn refresh(&mut self);
}

/// Document update/layout and paint passes.
pub trait DisplayEngine {
    fn layout_and_update(&mut self);
    fn render(&mut self);
}

/// Frame buffer lifecycle around `DisplayEngine::render`.
pub trait RenderSink {
    fn prepare_buffer(&mut self);
    fn present_buffer(&mut self);
}

/// Receives the human-readable FPS status line.
pub trait DisplaySink {
    fn publish(&mut self, text: &str);
}

/// Everything a `FramePacer` tick calls out to.
///
/// The display sink is optional; returning `None` makes the pacer skip
/// publishing without treating it as an error.
pub trait FrameHooks: ContentRefresher + DisplayEngine + RenderSink {
    fn display_sink(&mut self) -> Option<&mut dyn DisplaySink> {
        None
    }
}

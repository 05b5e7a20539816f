use cadence_engine::core::ContentRefresher;

use crate::content::{rows_markup, BenchRow, RowGenerator};

/// Height of one laid-out row in logical pixels.
pub const ROW_HEIGHT: f32 = 36.0;
/// Space taken by the title bar and fps line above the rows.
const HEADER_HEIGHT: f32 = 64.0;

/// Result of the last layout pass.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DocumentLayout {
    pub content_height: f32,
    pub visible_rows: usize,
}

/// The benchmark document: a title, a dynamic `performance` region that is
/// regenerated on every content refresh, and an `fps` status line.
#[derive(Debug)]
pub struct BenchDocument {
    title: String,
    /// Top offset of the document in logical pixels.
    top: f32,
    generator: RowGenerator,
    rows: Vec<BenchRow>,
    performance: String,
    fps: String,
    layout: DocumentLayout,
    generation: u64,
}

impl BenchDocument {
    pub fn new(title: impl Into<String>, top: f32, generator: RowGenerator) -> Self {
        Self {
            title: title.into(),
            top,
            generator,
            rows: Vec::new(),
            performance: String::new(),
            fps: String::new(),
            layout: DocumentLayout::default(),
            generation: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Inner markup of the `performance` element.
    pub fn performance_markup(&self) -> &str {
        &self.performance
    }

    /// Text of the `fps` element.
    pub fn fps_text(&self) -> &str {
        &self.fps
    }

    pub fn set_fps_text(&mut self, text: &str) {
        self.fps.clear();
        self.fps.push_str(text);
    }

    pub fn layout(&self) -> &DocumentLayout {
        &self.layout
    }

    /// Number of content refreshes so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stacks the rows below the header and counts how many fit in `viewport`.
    pub fn lay_out(&mut self, viewport: (f32, f32)) {
        let top = self.top + HEADER_HEIGHT;
        let available = (viewport.1 - top).max(0.0);
        let fitting = (available / ROW_HEIGHT).floor() as usize;

        self.layout = DocumentLayout {
            content_height: HEADER_HEIGHT + self.rows.len() as f32 * ROW_HEIGHT,
            visible_rows: fitting.min(self.rows.len()),
        };
    }

    /// Clear color for the current content; shifts with every refresh so
    /// regenerated frames are visibly distinct.
    pub fn background(&self) -> (f64, f64, f64) {
        let phase = (self.generation % 64) as f64 / 64.0;
        (0.05 + 0.1 * phase, 0.06, 0.09)
    }
}

impl ContentRefresher for BenchDocument {
    fn refresh(&mut self) {
        self.rows = self.generator.generate();
        self.performance = rows_markup(&self.rows);
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(rows: usize) -> BenchDocument {
        BenchDocument::new("Benchmark sample", 100.0, RowGenerator::seeded(3, rows))
    }

    #[test]
    fn refresh_replaces_dynamic_region() {
        let mut d = doc(50);
        assert!(d.performance_markup().is_empty());

        d.refresh();
        let first = d.performance_markup().to_string();
        assert_eq!(first.matches(r#"<div class="row">"#).count(), 50);

        d.refresh();
        assert_eq!(d.generation(), 2);
        assert_ne!(d.performance_markup(), first);
    }

    #[test]
    fn layout_counts_rows_that_fit() {
        let mut d = doc(50);
        d.refresh();

        // 100 + 64 = 164 px of header; 1000 - 164 = 836 px -> 23 rows.
        d.lay_out((1800.0, 1000.0));
        assert_eq!(d.layout().visible_rows, 23);
        assert_eq!(d.layout().content_height, 64.0 + 50.0 * ROW_HEIGHT);

        d.lay_out((1800.0, 100.0));
        assert_eq!(d.layout().visible_rows, 0);
    }

    #[test]
    fn layout_caps_at_row_count() {
        let mut d = doc(3);
        d.refresh();
        d.lay_out((800.0, 4000.0));
        assert_eq!(d.layout().visible_rows, 3);
    }

    #[test]
    fn fps_text_is_replaced() {
        let mut d = doc(1);
        d.set_fps_text("FPS: 1.000000");
        d.set_fps_text("FPS: 2.000000");
        assert_eq!(d.fps_text(), "FPS: 2.000000");
    }
}

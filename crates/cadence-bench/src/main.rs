mod cli;
mod content;
mod document;
mod headless;
mod windowed;

use anyhow::{Context, Result};
use clap::Parser;

use cadence_engine::input::KeyBindings;
use cadence_engine::logging::init_logging;
use cadence_engine::pacer::FramePacer;
use cadence_engine::window::Runtime;

use cli::Args;
use document::BenchDocument;
use windowed::BenchApp;

const DOCUMENT_TITLE: &str = "Benchmark sample";
const DOCUMENT_TOP: f32 = 100.0;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.logging());

    let mut pacer = FramePacer::monotonic(args.pacer()).context("failed to create frame pacer")?;
    let mut document = BenchDocument::new(DOCUMENT_TITLE, DOCUMENT_TOP, args.generator());

    if args.headless {
        headless::run_headless(&mut pacer, &mut document, args.frames)?;
        return Ok(());
    }

    log::info!("Space: toggle render | Down: step render | Enter: toggle update | Right: step update | F8: diagnostics | Esc: quit");

    let app = BenchApp::new(pacer, KeyBindings::default(), document);
    Runtime::run(args.runtime(), args.gpu(), app)
}

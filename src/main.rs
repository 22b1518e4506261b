//! Terminal memory-match runner (default binary).
//!
//! Runs a fixed-timestep frame loop: input arriving during a frame is queued,
//! then applied in arrival order followed by one game tick, and the resulting
//! scene is drawn through a diffing framebuffer renderer. Cards are clicked
//! with the mouse; `q` or Ctrl-C quits.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::EnvFilter;

use memory_match::config::RunConfig;
use memory_match::core::{GameState, SceneSnapshot};
use memory_match::input::map_event;
use memory_match::term::{FrameBuffer, SceneView, TerminalRenderer};
use memory_match::types::{InputEvent, Viewport};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let seed = config.resolve_seed();
    info!(seed, tick_ms = config.tick_ms, "starting");

    let mut game = GameState::new(seed);
    let view = SceneView::new();
    let mut snap = SceneSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut pending: Vec<InputEvent> = Vec::with_capacity(16);

    let frame = Duration::from_millis(config.tick_ms as u64);
    let mut last_frame = Instant::now();
    let mut viewport = current_viewport();

    loop {
        // Queue input until the frame deadline.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            let ev = event::read()?;
            if let Event::Resize(w, h) = ev {
                viewport = Viewport::new(w, h);
                term.invalidate();
            }
            if let Some(input) = map_event(&ev, viewport) {
                pending.push(input);
            }
        }

        if last_frame.elapsed() < frame {
            continue;
        }
        last_frame = Instant::now();

        game.advance_frame(pending.drain(..));
        if !game.running() {
            info!(score = game.score(), "exiting");
            return Ok(());
        }

        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

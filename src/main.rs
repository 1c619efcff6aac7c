//! Terminal Memory Match runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `memory_match::term`. Game time only moves when the loop calls
//! [`App::tick`], once per frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use memory_match::app::App;
use memory_match::cli::Cli;
use memory_match::core::GameEngine;
use memory_match::input::{handle_key_event, should_quit};
use memory_match::logging::init_file_logger;
use memory_match::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use memory_match::types::FRAME_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_file_logger(cli.log_file.as_deref(), cli.verbose)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, player = %cli.player, difficulty = %cli.difficulty, "launching");

    let mut app = App::new(GameEngine::new(cli.game_config(), seed), cli.settings());
    app.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.refresh();
        view.render_into(app.snapshot(), &app.hud(), Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.apply(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            last_frame += Duration::from_millis(ms as u64);
            app.tick(ms);
        }
    }
}

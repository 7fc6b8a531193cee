//! Terminal fruit memory runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the `term`
//! crate. The game is advanced on a fixed tick; input is polled in between.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use fruit_memory::core::{dispatch, GameCommand, GameState, RoundSnapshot, Settings};
use fruit_memory::input::{handle_key_event, should_quit, GridCursor};
use fruit_memory::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use fruit_memory::types::{KeyIntent, TICK_MS};

/// Memorize the fruit sequence, then find the pairs on the board.
#[derive(Parser)]
#[command(name = "fruit-memory", about = "Terminal fruit memory game")]
struct Cli {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with the custom-mode profile
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start directly in custom mode
    #[arg(long)]
    custom: bool,

    /// Write logs to this file (RUST_LOG selects the level)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let profile = match &cli.config {
        Some(path) => Settings::load_or_default(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::custom_defaults(),
    };
    let seed = cli.seed.unwrap_or_else(time_seed);
    log::info!("starting with seed {seed}");

    let mut game = GameState::new(seed);
    if cli.custom {
        game.apply_custom_settings(profile.clone())?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &profile);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // Raw mode owns the terminal; logs only go to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, profile: &Settings) -> Result<()> {
    let view = GameView::default();
    let mut hud = Hud::new();
    let mut cursor = GridCursor::new(game.board().size() as usize);
    let mut snap = RoundSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Present.
        dispatch(&mut hud, &game.drain_events());
        if hud.take_bell() {
            term.bell()?;
        }
        cursor.resize(game.board().size() as usize);
        game.snapshot_into(&mut snap);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            &snap,
            &hud,
            Some((cursor.row(), cursor.col())),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = handle_key_event(key) {
                        apply_intent(game, &mut cursor, profile, intent);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}

fn apply_intent(game: &mut GameState, cursor: &mut GridCursor, profile: &Settings, intent: KeyIntent) {
    let command = match intent {
        KeyIntent::Move(dir) => {
            cursor.move_dir(dir);
            return;
        }
        KeyIntent::View => GameCommand::ViewCell(cursor.index()),
        KeyIntent::Verify => GameCommand::VerifyCell(cursor.index()),
        KeyIntent::Start => GameCommand::Start,
        KeyIntent::Reset => GameCommand::Reset,
        KeyIntent::Pause => GameCommand::TogglePause,
        KeyIntent::CustomMode => GameCommand::ApplyCustomSettings(profile.clone()),
        KeyIntent::MainMode => GameCommand::ExitCustomMode,
    };

    let name = command.name();
    if let Err(e) = game.apply_command(command) {
        // Rejected interactions are expected; failures already produced events.
        log::debug!("{name}: {e}");
    }
}

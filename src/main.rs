use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use stage_snake::config::{BOARD_SIZE_PX, CELL_SIZE_PX, FRAME_INTERVAL_MS, GridSize, THEME_MEADOW};
use stage_snake::error::AppError;
use stage_snake::game::GameState;
use stage_snake::game_loop::{GameLoop, Renderer};
use stage_snake::input::{GameInput, InputHandler};
use stage_snake::renderer::TerminalRenderer;
use stage_snake::terminal_runtime::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food and obstacle placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostic logs to this file (filter with RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("stage-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    init_logging(cli.log_file.as_deref())?;

    let bounds = GridSize::from_pixels(BOARD_SIZE_PX, CELL_SIZE_PX)?;
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };
    log::info!(
        "starting on a {0}x{0} grid (seed: {1:?})",
        bounds.tile_count(),
        cli.seed
    );

    install_panic_hook();
    let mut renderer = TerminalRenderer::new(TerminalSession::enter()?, &THEME_MEADOW);
    let mut input = InputHandler::new();
    let mut game_loop = GameLoop::new();
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let started = Instant::now();

    renderer.render(&state)?;

    loop {
        match input.poll_input(frame_interval)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Direction(direction)) => state.apply_input(direction),
            None => {}
        }

        game_loop.frame(started.elapsed(), &mut state, &mut renderer)?;
    }

    log::info!("quit at score {} on stage {}", state.score, state.stage);
    Ok(())
}

fn init_logging(path: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{DEFAULT_NUM_COLS, DEFAULT_NUM_ROWS, INPUT_POLL_MS, THEME_CLASSIC};
use grid_snake::error::AppError;
use grid_snake::game::GameState;
use grid_snake::grid::GridSize;
use grid_snake::input::InputHandler;
use grid_snake::logging::{default_log_path, init_file_logger};
use grid_snake::renderer;
use grid_snake::session::{Flow, Session};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{LevelFilter, info};

#[derive(Debug, Parser)]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// Number of grid rows.
    #[arg(long, default_value_t = DEFAULT_NUM_ROWS)]
    rows: u16,

    /// Number of grid columns.
    #[arg(long, default_value_t = DEFAULT_NUM_COLS)]
    cols: u16,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path (defaults to the platform data directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity: off, error, warn, info, debug, trace.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_file_logger(&log_path, cli.log_level)?;

    let grid = GridSize::new(cli.rows, cli.cols)?;
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(grid, seed),
        None => GameState::new(grid),
    };
    info!("starting {}x{} game", grid.rows(), grid.cols());

    install_panic_hook();
    run(Session::new(state))
}

fn run(mut session: Session) -> Result<(), AppError> {
    let mut terminal = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let poll_timeout = Duration::from_millis(INPUT_POLL_MS);

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &session.state, &THEME_CLASSIC))?;

        if let Some(game_input) = input.poll_input(poll_timeout)? {
            if session.handle_input(game_input, Instant::now()) == Flow::Quit {
                break;
            }
        }

        session.advance(Instant::now());
    }

    info!("quit with score {}", session.state.score);
    Ok(())
}

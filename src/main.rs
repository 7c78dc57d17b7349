use std::io;
use std::panic;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use clap::Parser;
use tick_snake::clock::Clock;
use tick_snake::config::{
    GridSize, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, FRAME_INTERVAL, THEME_CLASSIC,
};
use tick_snake::frame_loop::{advance_frame, FrameOutcome};
use tick_snake::game::GameState;
use tick_snake::input::{InputHandler, InputSource};
use tick_snake::logging;
use tick_snake::renderer;
use tick_snake::terminal_runtime::{restore_terminal, AppTerminal, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Grid height including walls; shrunk to fit the terminal.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Grid width including walls; shrunk to fit the terminal.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write tracing output to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at debug level instead of info.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init(path, cli.verbose)?;
    }

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    let (cols, rows) = crossterm::terminal::size()?;
    let grid = GridSize {
        height: cli.height,
        width: cli.width,
    }
    .fit_to_terminal(cols, rows);

    let mut state = new_game(grid, cli.seed)?;
    let mut input = InputHandler::new();

    let outcome = run(session.terminal_mut(), &mut state, &mut input)?;
    if outcome == FrameOutcome::GameOver {
        session
            .terminal_mut()
            .draw(|frame| renderer::render_game_over(frame, &state.snapshot(), &THEME_CLASSIC))?;
        input.wait_for_any_key()?;
    }

    Ok(())
}

fn new_game(grid: GridSize, seed: Option<u64>) -> io::Result<GameState> {
    let state = match seed {
        Some(seed) => GameState::initialize_with_seed(grid.height, grid.width, seed),
        None => GameState::initialize(grid.height, grid.width),
    };

    state.map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))
}

fn run(
    terminal: &mut AppTerminal,
    state: &mut GameState,
    input: &mut dyn InputSource,
) -> io::Result<FrameOutcome> {
    let mut clock = Clock::new();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &state.snapshot(), &THEME_CLASSIC))?;

        let now = Instant::now();
        let outcome = advance_frame(state, &mut clock, input, now - last_frame)?;
        last_frame = now;

        if outcome != FrameOutcome::Continue {
            return Ok(outcome);
        }

        thread::sleep(FRAME_INTERVAL);
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;
use gridsnake::config::{GridSize, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, THEME_CLASSIC};
use gridsnake::input::{GameInput, InputEvent, InputHandler};
use gridsnake::platform::Platform;
use gridsnake::renderer;
use gridsnake::score::{HighScoreStore, JsonFileStore};
use gridsnake::session::{Session, SessionPhase};
use gridsnake::terminal_runtime::TerminalSession;

/// Input poll timeout; doubles as the frame pacing interval.
const FRAME_POLL: Duration = Duration::from_millis(15);

#[derive(Debug, Parser)]
#[command(name = "gridsnake", version, about = "Grid snake for the terminal")]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH, value_parser = clap::value_parser!(u16).range(5..=200))]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT, value_parser = clap::value_parser!(u16).range(5..=200))]
    height: u16,

    /// Seed the food placement RNG for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Force plain ASCII glyphs.
    #[arg(long)]
    ascii: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let platform = Platform::detect();

    let store = JsonFileStore::at_default_location();
    if let Err(error) = store.load() {
        // Warn before entering raw mode; the session falls back to 0.
        eprintln!("warning: could not read high score file: {error}");
    }

    let grid = GridSize {
        width: cli.width,
        height: cli.height,
    };
    let mut session = Session::new(grid, Box::new(store), cli.seed);

    run(&mut session, platform, cli.ascii)
}

fn run(session: &mut Session, platform: Platform, force_ascii: bool) -> io::Result<()> {
    let mut terminal_session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let glyphs = platform.glyphs(force_ascii);

    // The session notifies on every commit; the loop repaints only then,
    // on resize, and once at startup.
    let dirty = Rc::new(Cell::new(true));
    {
        let dirty = Rc::clone(&dirty);
        session.subscribe(move |_| dirty.set(true));
    }

    loop {
        if dirty.replace(false) {
            let snapshot = session.snapshot();
            terminal_session
                .terminal_mut()
                .draw(|frame| renderer::render(frame, &snapshot, glyphs, &THEME_CLASSIC))?;
        }

        match input.poll(FRAME_POLL)? {
            Some(InputEvent::Game(GameInput::Quit)) => break,
            Some(InputEvent::Game(game_input)) => handle_input(session, game_input),
            Some(InputEvent::Resized) => dirty.set(true),
            None => {}
        }

        session.advance(Instant::now());
    }

    Ok(())
}

fn handle_input(session: &mut Session, input: GameInput) {
    let now = Instant::now();
    match input {
        GameInput::Direction(direction) => {
            session.request_direction(direction);
        }
        // Space is contextual: start from the start screen, replay after a
        // terminal phase, otherwise a plain pause toggle.
        GameInput::PauseToggle => match session.phase() {
            SessionPhase::Idle => session.start(now),
            phase if phase.is_terminal() => session.start(now),
            _ => session.pause_toggle(now),
        },
        GameInput::Start => session.start(now),
        GameInput::Reset => session.reset(),
        GameInput::Quit => {}
    }
}

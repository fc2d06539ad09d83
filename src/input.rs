use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level control events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    PauseToggle,
    Start,
    Reset,
    Quit,
}

/// Events surfaced to the frame loop by [`InputHandler::poll`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputEvent {
    Game(GameInput),
    /// The terminal was resized; the view needs a repaint.
    Resized,
}

/// Polls crossterm events and translates them into [`InputEvent`]s.
///
/// Pure translation: no game logic lives here.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one terminal event.
    ///
    /// Returns `Ok(None)` on timeout and for events with no mapping. The
    /// timeout doubles as frame pacing for the caller's loop.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                map_key(key.code).map(InputEvent::Game)
            }
            Event::Resize(_, _) => Some(InputEvent::Resized),
            _ => None,
        })
    }
}

fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameInput::Direction(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameInput::Direction(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameInput::Direction(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Char(' ') => Some(GameInput::PauseToggle),
        KeyCode::Enter => Some(GameInput::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameInput::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

use std::time::{Duration, Instant};

use gridsnake::config::{GridSize, INITIAL_TICK_INTERVAL_MS};
use gridsnake::game::{DeathReason, GameState};
use gridsnake::input::Direction;
use gridsnake::score::MemoryStore;
use gridsnake::session::{Session, SessionPhase};
use gridsnake::snake::{Position, Snake};

const GRID: GridSize = GridSize {
    width: 20,
    height: 20,
};

fn new_session() -> Session {
    Session::new(GRID, Box::new(MemoryStore::default()), Some(1))
}

#[test]
fn eating_food_at_the_scripted_cell_matches_the_expected_state() {
    let t0 = Instant::now();
    let mut session = new_session();
    session.start(t0);

    // Fresh spawn is [(10,10), (9,10), (8,10)] heading right.
    session.game_mut().food = Position { x: 11, y: 10 };

    assert!(session.advance(t0 + Duration::from_millis(150)));

    let snapshot = session.snapshot();
    let segments: Vec<Position> = snapshot.snake.segments().copied().collect();
    assert_eq!(
        segments,
        vec![
            Position { x: 11, y: 10 },
            Position { x: 10, y: 10 },
            Position { x: 9, y: 10 },
            Position { x: 8, y: 10 },
        ]
    );
    assert_eq!(snapshot.score, 1);
    assert_eq!(snapshot.tick_interval_ms, 148);
    assert!(!snapshot.snake.occupies(snapshot.food));
    assert!(snapshot.food.is_within_bounds(GRID));
}

#[test]
fn driving_into_the_wall_ends_the_game_and_freezes_the_board() {
    let t0 = Instant::now();
    let mut session = new_session();
    session.start(t0);

    *session.game_mut() = GameState::from_parts(
        GRID,
        Snake::from_segments(vec![
            Position { x: 0, y: 10 },
            Position { x: 1, y: 10 },
            Position { x: 2, y: 10 },
        ]),
        Position { x: 5, y: 5 },
        Direction::Left,
    );
    let before: Vec<Position> = session.state().snake.segments().copied().collect();

    assert!(session.advance(t0 + Duration::from_millis(150)));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, SessionPhase::GameOver);
    assert_eq!(snapshot.death_reason, Some(DeathReason::Wall));

    let after: Vec<Position> = snapshot.snake.segments().copied().collect();
    assert_eq!(before, after, "board stays frozen at the last valid frame");
    assert_eq!(snapshot.food, Position { x: 5, y: 5 });
}

#[test]
fn reset_after_game_over_reinitializes_the_session() {
    let t0 = Instant::now();
    let mut session = new_session();
    session.start(t0);

    // Score once, then die against the wall.
    session.game_mut().food = Position { x: 11, y: 10 };
    assert!(session.advance(t0 + Duration::from_millis(150)));
    *session.game_mut() = GameState::from_parts(
        GRID,
        Snake::from_segments(vec![
            Position { x: 0, y: 10 },
            Position { x: 1, y: 10 },
        ]),
        Position { x: 5, y: 5 },
        Direction::Left,
    );
    assert!(session.advance(t0 + Duration::from_millis(298)));
    assert_eq!(session.phase(), SessionPhase::GameOver);

    session.reset();

    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.score(), 0);
    assert_eq!(session.tick_interval_ms(), INITIAL_TICK_INTERVAL_MS);
    assert_eq!(session.state().snake.len(), 3);
    assert_eq!(session.state().snake.head(), Position { x: 10, y: 10 });
    assert_eq!(session.state().direction(), Direction::Right);
}

#[test]
fn steering_between_ticks_applies_the_last_request_only() {
    let t0 = Instant::now();
    let mut session = new_session();
    session.start(t0);
    // Keep the food out of the way.
    session.game_mut().food = Position { x: 0, y: 0 };

    // Several requests between two ticks: only Down survives (Left is a
    // reversal and is dropped outright).
    session.request_direction(Direction::Up);
    session.request_direction(Direction::Left);
    session.request_direction(Direction::Down);

    assert!(session.advance(t0 + Duration::from_millis(150)));

    assert_eq!(session.state().snake.head(), Position { x: 10, y: 11 });
    assert_eq!(session.state().direction(), Direction::Down);
}

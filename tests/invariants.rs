use std::collections::HashSet;
use std::time::{Duration, Instant};

use gridsnake::config::GridSize;
use gridsnake::input::Direction;
use gridsnake::score::MemoryStore;
use gridsnake::session::{Session, SessionPhase};
use gridsnake::snake::Position;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GRID: GridSize = GridSize {
    width: 12,
    height: 12,
};

/// Drives thousands of ticks with random steering and checks the structural
/// invariants on every reachable committed state: all segments in bounds, no
/// two segments on the same cell, food never on the snake.
#[test]
fn random_walk_preserves_board_invariants() {
    let mut steering = StdRng::seed_from_u64(99);
    let mut session = Session::new(GRID, Box::new(MemoryStore::default()), Some(4));
    let mut now = Instant::now();
    session.start(now);

    let mut committed_ticks = 0u32;
    let mut sessions_played = 0u32;

    while committed_ticks < 5_000 {
        if session.phase().is_terminal() {
            sessions_played += 1;
            session.start(now);
        }

        if steering.gen_bool(0.4) {
            session.request_direction(random_direction(&mut steering));
        }

        now += Duration::from_millis(session.tick_interval_ms());
        assert!(session.advance(now));
        committed_ticks += 1;

        assert_invariants(&session);
    }

    // Random steering on a small board dies often; the restart path gets
    // exercised many times over.
    assert!(sessions_played > 0);
}

fn assert_invariants(session: &Session) {
    let snapshot = session.snapshot();

    let mut seen: HashSet<Position> = HashSet::new();
    for segment in snapshot.snake.segments() {
        assert!(
            segment.is_within_bounds(GRID),
            "segment {segment:?} out of bounds"
        );
        assert!(seen.insert(*segment), "segment {segment:?} duplicated");
    }

    assert!(!snapshot.snake.is_empty());

    // On a full-board victory the final food cell was just eaten; in every
    // other phase food must sit on a free cell.
    if snapshot.phase != SessionPhase::Victory {
        assert!(
            !snapshot.snake.occupies(snapshot.food),
            "food {:?} overlaps the snake",
            snapshot.food
        );
    }

    // Score is bounded by the cells the snake could have grown into.
    assert!(snapshot.score as usize <= GRID.total_cells());
}

fn random_direction(rng: &mut StdRng) -> Direction {
    match rng.gen_range(0..4) {
        0 => Direction::Up,
        1 => Direction::Down,
        2 => Direction::Left,
        _ => Direction::Right,
    }
}

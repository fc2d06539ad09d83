use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Draws a food position uniformly from the grid's free cells by rejection
/// sampling, matching the original placement behavior.
///
/// Returns `None` when the snake covers the whole grid; the caller treats a
/// full board as the win condition instead of sampling forever. Rejection
/// sampling degrades as occupancy approaches 100%, which is acceptable at
/// this game's grid sizes.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Option<Position> {
    if snake.len() >= grid.total_cells() {
        return None;
    }

    loop {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(grid.width)),
            y: rng.gen_range(0..i32::from(grid.height)),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }
}

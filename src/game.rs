use rand::Rng;

use crate::config::GridSize;
use crate::food::place_food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// What killed the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    Wall,
    SelfHit,
}

/// Result of committing one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Plain move, nothing eaten.
    Moved,
    /// Food eaten; the snake grew and new food was placed.
    Ate,
    /// The move was fatal; the state is untouched.
    Collision(DeathReason),
    /// Food eaten and the snake now covers every cell.
    BoardFull,
}

/// Authoritative board state for one session.
///
/// Owned exclusively by the session; the renderer and input layers only see
/// read-only snapshots. Replaced wholesale on reset, mutated only inside
/// [`GameState::advance`].
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: GridSize,
    pub snake: Snake,
    pub food: Position,
    direction: Direction,
    next_direction: Direction,
}

impl GameState {
    /// Creates a fresh board: centered three-segment snake heading right,
    /// food placed on a free cell.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(grid: GridSize, rng: &mut R) -> Self {
        let snake = Snake::spawn_centered(grid);
        let food =
            place_food(rng, grid, &snake).expect("a fresh board must have at least one free cell");

        Self {
            grid,
            snake,
            food,
            direction: Direction::Right,
            next_direction: Direction::Right,
        }
    }

    /// Creates a board from explicit parts, for scripted scenarios.
    #[must_use]
    pub fn from_parts(grid: GridSize, snake: Snake, food: Position, direction: Direction) -> Self {
        Self {
            grid,
            snake,
            food,
            direction,
            next_direction: direction,
        }
    }

    /// Returns the last committed heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the heading queued for the next tick.
    #[must_use]
    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    /// Queues a heading change for the next tick commit.
    ///
    /// Rejects the exact opposite of the committed heading, which would be
    /// an unconditional neck collision. Between two ticks the last accepted
    /// request wins; there is no queue of turns. Returns whether the request
    /// was accepted.
    pub fn request_direction(&mut self, requested: Direction) -> bool {
        if requested == self.direction.opposite() {
            return false;
        }

        self.next_direction = requested;
        true
    }

    /// Commits one tick: applies the queued heading, resolves collisions,
    /// growth, and food placement.
    ///
    /// Evaluation order is wall collision, self collision (tail excluded),
    /// then food. On a fatal move the state is left frozen at the last valid
    /// frame. Deterministic except for the food placement draw.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        let new_head = self.snake.head().offset(self.next_direction);

        if !new_head.is_within_bounds(self.grid) {
            return TickOutcome::Collision(DeathReason::Wall);
        }
        if self.snake.hits_body_excluding_tail(new_head) {
            return TickOutcome::Collision(DeathReason::SelfHit);
        }

        let ate = new_head == self.food;
        self.snake.advance_to(new_head, ate);
        self.direction = self.next_direction;

        if !ate {
            return TickOutcome::Moved;
        }

        match place_food(rng, self.grid, &self.snake) {
            Some(food) => {
                self.food = food;
                TickOutcome::Ate
            }
            None => TickOutcome::BoardFull,
        }
    }
}

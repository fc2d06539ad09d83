use std::collections::VecDeque;

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the grid.
    #[must_use]
    pub fn is_within_bounds(self, grid: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(grid.width)
            && self.y < i32::from(grid.height)
    }

    /// Returns the neighboring position one cell away in `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Snake body: an ordered sequence of cells, head at the front.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Spawns the initial snake for `grid`: three segments, vertically
    /// centered, head toward the horizontal center with the body extending
    /// behind it along decreasing x (the initial heading is Right).
    #[must_use]
    pub fn spawn_centered(grid: GridSize) -> Self {
        let center_x = i32::from(grid.width / 2);
        let center_y = i32::from(grid.height / 2);

        let body = (0..INITIAL_SNAKE_LENGTH)
            .map(|i| Position {
                x: center_x - i as i32,
                y: center_y,
            })
            .collect();

        Self { body }
    }

    /// Creates a snake from explicit segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if `position` hits the body with the tail excluded.
    ///
    /// The tail vacates its cell on the same tick the head advances, so a
    /// head landing on the current tail cell is not a collision.
    #[must_use]
    pub fn hits_body_excluding_tail(&self, position: Position) -> bool {
        let len = self.body.len();
        self.body
            .iter()
            .take(len.saturating_sub(1))
            .any(|segment| *segment == position)
    }

    /// Moves the head to `new_head`. Keeps the tail when `grow` is set,
    /// otherwise drops it so the length stays constant.
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn spawn_is_centered_with_body_behind_the_head() {
        let snake = Snake::spawn_centered(GridSize {
            width: 20,
            height: 20,
        });

        let segments: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 10, y: 10 },
                Position { x: 9, y: 10 },
                Position { x: 8, y: 10 },
            ]
        );
    }

    #[test]
    fn offset_moves_one_cell() {
        let origin = Position { x: 4, y: 7 };
        assert_eq!(origin.offset(Direction::Up), Position { x: 4, y: 6 });
        assert_eq!(origin.offset(Direction::Down), Position { x: 4, y: 8 });
        assert_eq!(origin.offset(Direction::Left), Position { x: 3, y: 7 });
        assert_eq!(origin.offset(Direction::Right), Position { x: 5, y: 7 });
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
            Position { x: 3, y: 5 },
        ]);

        snake.advance_to(Position { x: 6, y: 5 }, false);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position { x: 3, y: 5 }));
    }

    #[test]
    fn advance_with_growth_keeps_tail() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
        ]);

        snake.advance_to(Position { x: 6, y: 5 }, true);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Position { x: 4, y: 5 });
    }

    #[test]
    fn tail_cell_is_not_a_body_hit() {
        let snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 2, y: 3 },
            Position { x: 1, y: 3 },
        ]);

        // Tail cell: vacated this tick, so not a hit.
        assert!(!snake.hits_body_excluding_tail(Position { x: 1, y: 3 }));
        // Mid-body cell is a hit.
        assert!(snake.hits_body_excluding_tail(Position { x: 2, y: 3 }));
    }
}

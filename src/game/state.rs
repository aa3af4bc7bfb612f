use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::action::Difficulty;

/// A point on the board, in world units.
///
/// The origin is the center of the grid, y grows upward, and cells are
/// `cell_size` units across. Positions are grid-aligned except for the
/// snake's half-cell starting offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by a delta vector
    pub fn offset(&self, delta: Point) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }
}

/// The snake body: tail first, head last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    /// Create a single-cell snake at the given position
    pub fn new(start: Point) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);
        Self { body }
    }

    /// Get the head position (last segment)
    pub fn head(&self) -> Point {
        *self.body.back().expect("snake is never empty")
    }

    /// Append a new head
    pub fn push_head(&mut self, head: Point) {
        self.body.push_back(head);
    }

    /// Remove the tail segment
    pub fn pop_tail(&mut self) -> Option<Point> {
        self.body.pop_front()
    }

    /// Check whether any segment occupies the given position
    pub fn contains(&self, pos: Point) -> bool {
        self.body.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterate over body segments, tail to head
    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }
}

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head left the playable area
    Wall,
    /// Head landed on a body segment
    SelfHit,
}

/// Complete game state, owned by the controller and mutated only by
/// the engine and the input dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    /// Movement delta applied to the head each tick, read once per tick
    pub aim: Point,
    pub food: Point,
    pub score: u32,
    pub level: u32,
    /// Current tick interval in milliseconds
    pub interval_ms: u64,
    pub difficulty: Difficulty,
    pub paused: bool,
    pub game_over: bool,
}

impl GameState {
    /// True only in the Running state of {Running, Paused, GameOver}
    pub fn is_running(&self) -> bool {
        !self.paused && !self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_offset() {
        let p = Point::new(10, 0);
        assert_eq!(p.offset(Point::new(0, -10)), Point::new(10, -10));
        assert_eq!(p.offset(Point::new(20, 0)), Point::new(30, 0));
        assert_eq!(p.offset(Point::new(-20, 0)), Point::new(-10, 0));
    }

    #[test]
    fn test_snake_starts_as_single_cell() {
        let snake = Snake::new(Point::new(10, 0));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(10, 0));
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_snake_grow_and_shrink() {
        let mut snake = Snake::new(Point::new(0, 0));
        snake.push_head(Point::new(20, 0));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Point::new(20, 0));

        // Popping the tail keeps the newest head
        assert_eq!(snake.pop_tail(), Some(Point::new(0, 0)));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(20, 0));
    }

    #[test]
    fn test_snake_contains() {
        let mut snake = Snake::new(Point::new(0, 0));
        snake.push_head(Point::new(20, 0));
        assert!(snake.contains(Point::new(0, 0)));
        assert!(snake.contains(Point::new(20, 0)));
        assert!(!snake.contains(Point::new(40, 0)));
    }
}

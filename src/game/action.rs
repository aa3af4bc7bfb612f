use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::Point;

/// Direction the snake can be steered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the aim delta for this direction, scaled to one cell.
    ///
    /// y grows upward, matching the board's world coordinates.
    pub fn delta(&self, cell_size: i32) -> Point {
        match self {
            Direction::Up => Point::new(0, cell_size),
            Direction::Down => Point::new(0, -cell_size),
            Direction::Left => Point::new(-cell_size, 0),
            Direction::Right => Point::new(cell_size, 0),
        }
    }
}

/// Difficulty setting; selects the base tick interval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Base tick interval in milliseconds
    pub fn base_interval_ms(&self) -> u64 {
        match self {
            Difficulty::Easy => 150,
            Difficulty::Normal => 100,
            Difficulty::Hard => 50,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies: board geometry, the snake, difficulty/level pacing, and the
//! tick-by-tick state transitions.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Difficulty, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionKind, GameState, Point, Snake};

//! Terminal Snake with levels, difficulty settings, and pause
//!
//! This library provides:
//! - Core game logic (game module): board geometry, ticking, collisions,
//!   food, scoring and level pacing
//! - Keyboard dispatch (input module)
//! - TUI rendering (render module)
//! - Per-session play statistics (metrics module)
//! - The controller and event loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;

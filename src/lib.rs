//! Grid Snake - single-player Snake on a fixed 20x20 grid
//!
//! This library provides:
//! - Core game logic: snake, food, session and the tick engine (game module)
//! - Arrow-key mapping (input module)
//! - TUI rendering of game snapshots (render module)
//! - The timer-driven terminal loop (modes module)
//! - File logger setup (logging module)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;

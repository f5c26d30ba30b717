//! Core game logic module for Snake
//!
//! Everything here is free of terminal I/O: the loop driver in `modes` feeds
//! ticks and direction requests in and hands snapshots to the renderer.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickResult};
pub use food::Food;
pub use grid::Grid;
pub use snapshot::Snapshot;
pub use state::{CollisionType, GameSession, Phase, Point, Snake};

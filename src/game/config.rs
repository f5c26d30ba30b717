use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::grid::Grid;
use super::state::Point;

/// Canvas width in pixels
pub const CANVAS_WIDTH: u32 = 400;
/// Canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 400;
/// Edge length of one grid cell in pixels
pub const CELL_SIZE: u32 = 20;
/// Time between two ticks
pub const TICK_INTERVAL_MS: u64 = 100;
/// Number of segments a fresh snake starts with
pub const INITIAL_SNAKE_LENGTH: usize = 3;
/// Where a fresh snake's head starts
pub const INITIAL_HEAD: Point = Point { x: 5, y: 10 };
/// Random draws before food placement falls back to scanning for free cells
pub const MAX_SPAWN_ATTEMPTS: u32 = 1024;

/// Fixed configuration of a game
///
/// Grid dimensions are not stored; they are derived from the canvas and cell
/// sizes the same way a pixel canvas would be divided up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cell_size: u32,
    pub tick_interval_ms: u64,
    pub initial_snake_length: usize,
    pub initial_head: Point,
    pub max_spawn_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            cell_size: CELL_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            initial_head: INITIAL_HEAD,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Playing field in cells: floor(canvas / cell) on each axis
    pub fn grid(&self) -> Grid {
        Grid::from_canvas(self.canvas_width, self.canvas_height, self.cell_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

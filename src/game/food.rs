use log::warn;
use rand::Rng;
use rand::seq::IteratorRandom;

use super::grid::Grid;
use super::state::{Point, Snake};

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Point,
}

impl Food {
    /// Food at a fixed cell, for callers that already know a free spot
    pub fn at(position: Point) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Place food on a uniformly random cell the snake does not occupy
    ///
    /// Samples at most `max_attempts` random cells; when all of them land on
    /// the snake, picks uniformly among the free cells left on the grid.
    /// Returns `None` only if the snake covers the whole grid.
    pub fn spawn<R: Rng>(
        snake: &Snake,
        grid: &Grid,
        rng: &mut R,
        max_attempts: u32,
    ) -> Option<Self> {
        if grid.width <= 0 || grid.height <= 0 {
            return None;
        }

        for _ in 0..max_attempts {
            let candidate = Point::new(
                rng.gen_range(0..grid.width),
                rng.gen_range(0..grid.height),
            );
            if !snake.occupies(candidate) {
                return Some(Self::at(candidate));
            }
        }

        warn!(
            "no free cell after {} random draws, scanning the grid (snake length {})",
            max_attempts,
            snake.len()
        );

        grid.cells()
            .filter(|&cell| !snake.occupies(cell))
            .choose(rng)
            .map(Self::at)
    }
}

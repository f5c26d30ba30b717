use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::direction::Direction;
use super::food::Food;
use super::grid::Grid;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move point by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move point one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Type of collision that ends a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the grid
    Wall,
    /// Head ran into the snake's own body
    SelfCollision,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Segments from head (front) to tail (back); never empty
    body: VecDeque<Point>,
    direction: Direction,
    pending_growth: bool,
}

impl Snake {
    /// Lay out a straight snake of `length` segments trailing behind `head`
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self {
            body,
            direction,
            pending_growth: false,
        }
    }

    /// Build a snake from explicit segments, head first
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Point>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Point> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            direction,
            pending_growth: false,
        })
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> bool {
        self.pending_growth
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check if any segment, head included, sits on `point`
    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// Check if a non-head segment sits on `point`
    pub fn collides_with_body(&self, point: Point) -> bool {
        self.body.iter().skip(1).any(|&segment| segment == point)
    }

    /// Advance one cell in the current direction
    ///
    /// The tail is dropped unless growth is pending, in which case the flag is
    /// consumed and the snake ends up one segment longer.
    pub fn move_snake(&mut self) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.push_front(new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Turn towards `requested` unless it would reverse the snake
    ///
    /// Returns whether the direction was applied.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if self.direction.is_opposite(requested) {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Grow by one segment on the next move
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    pub fn eats(&self, food: &Food) -> bool {
        self.head() == food.position()
    }

    pub fn collision(&self, grid: &Grid) -> bool {
        self.collision_type(grid).is_some()
    }

    /// Which collision, if any, the head is currently in; walls take precedence
    pub fn collision_type(&self, grid: &Grid) -> Option<CollisionType> {
        let head = self.head();
        if !grid.contains(head) {
            return Some(CollisionType::Wall);
        }
        if self.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }
        None
    }
}

/// Lifecycle of a session; `GameOver` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Everything that changes while a game is played
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub grid: Grid,
    score: u32,
    phase: Phase,
}

impl GameSession {
    pub fn new(snake: Snake, food: Food, grid: Grid) -> Self {
        Self {
            snake,
            food,
            grid,
            score: 0,
            phase: Phase::Running,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Count one eaten food; the score never goes down
    pub(crate) fn add_point(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Enter the terminal phase; there is no way back
    pub(crate) fn end(&mut self) {
        self.phase = Phase::GameOver;
    }
}

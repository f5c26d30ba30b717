use super::state::{GameSession, Point};

/// What the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Segments head first
    pub body: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub running: bool,
    pub grid_width: i32,
    pub grid_height: i32,
}

impl Snapshot {
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }
}

impl From<&GameSession> for Snapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            body: session.snake.segments().collect(),
            food: session.food.position(),
            score: session.score(),
            running: session.is_running(),
            grid_width: session.grid.width,
            grid_height: session.grid.height,
        }
    }
}

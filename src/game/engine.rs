use log::{debug, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    config::GameConfig,
    direction::Direction,
    food::Food,
    state::{CollisionType, GameSession, Snake},
};

/// Result of a game tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
    /// Whether the session is over after this tick
    pub terminated: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine seeded from the operating system
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh session: initial snake facing right, food, score 0
    ///
    /// Returns `None` if the configured grid has no free cell for food.
    pub fn reset(&mut self) -> Option<GameSession> {
        let grid = self.config.grid();
        let snake = Snake::new(
            self.config.initial_head,
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = Food::spawn(&snake, &grid, &mut self.rng, self.config.max_spawn_attempts)?;

        Some(GameSession::new(snake, food, grid))
    }

    /// Execute one tick: move, eat, check for collisions
    ///
    /// The snake moves in whatever direction it was last turned to.
    /// Ticking a session that is already over changes nothing.
    pub fn tick(&mut self, session: &mut GameSession) -> TickResult {
        if !session.is_running() {
            return TickResult {
                ate_food: false,
                collision: None,
                terminated: true,
            };
        }

        session.snake.move_snake();

        let ate_food = session.snake.eats(&session.food);
        if ate_food {
            session.snake.grow();
            session.add_point();
            debug!(
                "food eaten at {:?}, score {}",
                session.food.position(),
                session.score()
            );

            match Food::spawn(
                &session.snake,
                &session.grid,
                &mut self.rng,
                self.config.max_spawn_attempts,
            ) {
                Some(food) => session.food = food,
                None => {
                    warn!("snake fills the grid, no cell left for food");
                    session.end();
                }
            }
        }

        let collision = session.snake.collision_type(&session.grid);
        if let Some(kind) = collision {
            session.end();
            info!(
                "game over: {:?} at {:?}, final score {}",
                kind,
                session.snake.head(),
                session.score()
            );
        }

        TickResult {
            ate_food,
            collision,
            terminated: !session.is_running(),
        }
    }
}

use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{Direction, GameConfig, GameEngine, GameSession, Snapshot, TickResult};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// Loop driver: owns the terminal, the tick timer and the current session
pub struct PlayMode {
    engine: GameEngine,
    session: GameSession,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    games_played: u32,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut engine = GameEngine::new(config);
        let session = engine
            .reset()
            .ok_or_else(|| anyhow!("Grid has no free cell for the first food"))?;

        Ok(Self {
            engine,
            session,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            games_played: 1,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Raw mode and the alternate screen stay on until cleanup_terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!("game 1 started");

        let result = self.run_game_loop(&mut terminal).await;

        // Restore the terminal even when the loop failed
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval fires immediately; the snake should
        // only move one period after the initial frame.
        tick_timer.reset();

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        let resized = matches!(event, Event::Resize(_, _));
                        let restarted = self.handle_event(event);
                        if restarted {
                            tick_timer.reset();
                        }
                        if restarted || resized {
                            self.draw(terminal)?;
                        }
                    }
                }

                // Game logic tick; disabled once the session is over
                _ = tick_timer.tick(), if self.session.is_running() => {
                    self.on_tick();
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quit with score {}", self.session.score());
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let snapshot = Snapshot::from(&self.session);
        terminal
            .draw(|frame| self.renderer.render(frame, &snapshot))
            .context("Failed to draw frame")?;
        Ok(())
    }

    /// Apply one terminal event; returns true when a new session was started
    fn handle_event(&mut self, event: Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Turn(direction) => {
                self.turn(direction);
                false
            }
            KeyAction::Restart => self.restart(),
            KeyAction::Quit => {
                self.should_quit = true;
                false
            }
            KeyAction::None => false,
        }
    }

    /// Steer right away; the snake only moves on the next tick
    ///
    /// Each press is checked against the direction left by the previous one.
    fn turn(&mut self, direction: Direction) {
        if !self.session.is_running() {
            return;
        }
        if !self.session.snake.change_direction(direction) {
            debug!("ignored reversal to {:?}", direction);
        }
    }

    fn on_tick(&mut self) -> TickResult {
        self.engine.tick(&mut self.session)
    }

    /// Start a new session, but only once the current one is over
    fn restart(&mut self) -> bool {
        if self.session.is_running() {
            return false;
        }
        let Some(session) = self.engine.reset() else {
            warn!("no free cell for food, keeping the finished game");
            return false;
        };
        self.session = session;
        self.games_played += 1;
        info!("game {} started", self.games_played);
        true
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        // Undo run's setup in reverse order
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

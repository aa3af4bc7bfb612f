use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, interval, interval_at};
use tracing::{debug, info};

use crate::game::{Difficulty, GameConfig, GameEngine, GameState, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Owns the game state and drives the tick/render/input loop
pub struct App {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let renderer = Renderer::new(engine.config().clone());
        let state = engine.reset(Difficulty::default());

        Self {
            engine,
            state,
            stats: SessionStats::new(),
            renderer,
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The tick interval follows the state; level-ups and difficulty
        // changes shorten it, so it gets rebuilt whenever they disagree.
        let mut tick_ms = self.state.interval_ms;
        let mut tick_timer = interval(Duration::from_millis(tick_ms));

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        info!(difficulty = %self.state.difficulty, "game started");

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    if self.state.is_running() {
                        self.stats.update();
                    }
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.state.interval_ms != tick_ms {
                tick_ms = self.state.interval_ms;
                tick_timer = rearm(tick_ms);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => {
                self.engine.steer(&mut self.state, direction);
            }
            KeyAction::TogglePause => {
                self.engine.toggle_pause(&mut self.state);
                debug!(paused = self.state.paused, "pause toggled");
            }
            KeyAction::Restart => {
                self.reset_game();
            }
            KeyAction::SetDifficulty(difficulty) => {
                if self.engine.set_difficulty(&mut self.state, difficulty) {
                    self.stats.on_game_start();
                }
                info!(%difficulty, "difficulty selected");
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        match self.engine.tick(&mut self.state) {
            TickOutcome::Collision(kind) => {
                self.stats
                    .on_game_over(self.state.difficulty, self.state.score);
                info!(?kind, score = self.state.score, "game over");
            }
            TickOutcome::Moved { leveled_up: true, .. } => {
                info!(
                    level = self.state.level,
                    interval_ms = self.state.interval_ms,
                    "level up"
                );
            }
            _ => {}
        }
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset(self.state.difficulty);
        self.stats.on_game_start();
        info!(difficulty = %self.state.difficulty, "game restarted");
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Rebuild the tick timer without the immediate first fire `interval` has
fn rearm(tick_ms: u64) -> Interval {
    let period = Duration::from_millis(tick_ms);
    interval_at(Instant::now() + period, period)
}

use rand::Rng;

use super::{
    action::{Difficulty, Direction},
    config::GameConfig,
    state::{CollisionKind, GameState, Point, Snake},
};

/// What a single tick did to the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is paused or over; nothing happened
    Suspended,
    /// The snake advanced one cell
    Moved { ate_food: bool, leveled_up: bool },
    /// The snake died this tick
    Collision(CollisionKind),
}

/// The game engine: all state transitions, no I/O
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game at the given difficulty.
    ///
    /// The snake starts as a single cell half a cell off the origin, drifting
    /// downward at half speed until the first steering input snaps the aim to
    /// full-cell deltas.
    pub fn reset(&mut self, difficulty: Difficulty) -> GameState {
        let half_cell = self.config.cell_size / 2;
        let snake = Snake::new(Point::new(half_cell, 0));
        let food = self.spawn_food(&snake);

        GameState {
            snake,
            aim: Point::new(0, -half_cell),
            food,
            score: 0,
            level: 1,
            interval_ms: difficulty.base_interval_ms(),
            difficulty,
            paused: false,
            game_over: false,
        }
    }

    /// Advance the game by one tick.
    ///
    /// A paused or finished game is left untouched; the caller stops
    /// re-arming the tick timer once it sees `Suspended` after a collision.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome::Suspended;
        }

        let head = state.snake.head().offset(state.aim);

        if !self.inside(head) {
            state.game_over = true;
            return TickOutcome::Collision(CollisionKind::Wall);
        }
        if state.snake.contains(head) {
            state.game_over = true;
            return TickOutcome::Collision(CollisionKind::SelfHit);
        }

        state.snake.push_head(head);

        // Axis-wise tolerance, not equality: a hit can register one tick
        // before exact overlap.
        let cell = self.config.cell_size;
        let ate_food =
            (head.x - state.food.x).abs() < cell && (head.y - state.food.y).abs() < cell;

        let mut leveled_up = false;
        if ate_food {
            state.score += 1;
            state.food = self.spawn_food(&state.snake);
            leveled_up = self.check_level(state);
        } else {
            state.snake.pop_tail();
        }

        TickOutcome::Moved { ate_food, leveled_up }
    }

    /// Point the snake in a new direction; ignored while paused or over
    pub fn steer(&self, state: &mut GameState, direction: Direction) {
        if state.is_running() {
            state.aim = direction.delta(self.config.cell_size);
        }
    }

    /// Toggle pause; a finished game cannot be paused or resumed
    pub fn toggle_pause(&self, state: &mut GameState) {
        if !state.game_over {
            state.paused = !state.paused;
        }
    }

    /// Switch difficulty. Resets the game immediately when running; when
    /// paused or over, the new setting only takes effect on the next reset.
    /// Returns true if a reset happened.
    pub fn set_difficulty(&mut self, state: &mut GameState, difficulty: Difficulty) -> bool {
        if state.is_running() {
            *state = self.reset(difficulty);
            true
        } else {
            state.difficulty = difficulty;
            false
        }
    }

    /// Strict boundary check on the playable area
    fn inside(&self, p: Point) -> bool {
        let cell = self.config.cell_size;
        let half_w = self.config.grid_width / 2 * cell;
        let half_h = self.config.grid_height / 2 * cell;
        -half_w < p.x && p.x < half_w - cell && -half_h < p.y && p.y < half_h - cell
    }

    /// Pick a random cell-aligned position not occupied by the snake.
    ///
    /// Retries until a free cell turns up; the grid is large relative to the
    /// snake, so this terminates quickly in practice.
    fn spawn_food(&mut self, snake: &Snake) -> Point {
        let cell = self.config.cell_size;
        let (half_w, half_h) = (self.config.grid_width / 2, self.config.grid_height / 2);
        loop {
            let x = self.rng.gen_range(-half_w + 1..half_w) * cell;
            let y = self.rng.gen_range(-half_h + 1..half_h) * cell;
            let pos = Point::new(x, y);
            if !snake.contains(pos) {
                return pos;
            }
        }
    }

    /// Level up once the score crosses the per-level threshold
    fn check_level(&mut self, state: &mut GameState) -> bool {
        if state.score >= state.level * self.config.level_score {
            state.level += 1;
            state.interval_ms = state
                .interval_ms
                .saturating_sub(self.config.speedup_ms)
                .max(self.config.min_interval_ms);
            state.food = self.spawn_food(&state.snake);
            true
        } else {
            false
        }
    }
}

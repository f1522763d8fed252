use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    FASTEST_INTERVAL_MS, INITIAL_SNAKE_LENGTH, SLOWEST_INTERVAL_MS, SPEED_INCREMENT_MS,
};
use crate::food::{spawn_food, vacant_cells};
use crate::grid::{Cell, GridSize};
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::Snake;

/// Coarse game-state machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Why the game reached [`GamePhase::GameOver`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    /// The snake fills every cell of the grid.
    BoardFull,
}

/// What a single [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Skipped,
    Moved,
    /// Food was eaten. The tick interval may have changed.
    Ate,
    GameOver(GameOverReason),
}

/// How one cell should be drawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellKind {
    Empty,
    Body,
    Head,
    Food,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only once the snake fills the grid.
    pub food: Option<Cell>,
    pub score: u32,
    pub phase: GamePhase,
    pub tick_count: u64,
    game_over_reason: Option<GameOverReason>,
    direction_queue: VecDeque<Direction>,
    interval_ms: u64,
    grid: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh idle game seeded from OS entropy.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self::from_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(grid: GridSize, seed: u64) -> Self {
        Self::from_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn from_rng(grid: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::initial();
        let food = spawn_food(&mut rng, grid, &snake);

        Self {
            snake,
            food,
            score: 0,
            phase: GamePhase::Idle,
            tick_count: 0,
            game_over_reason: None,
            direction_queue: VecDeque::from([Direction::Right]),
            interval_ms: SLOWEST_INTERVAL_MS,
            grid,
            rng,
        }
    }

    /// Buffers a direction for the next tick.
    ///
    /// Input is only taken while running; a paused game keeps whatever was
    /// already queued and picks it up again on resume.
    pub fn enqueue_direction(&mut self, direction: Direction) {
        if self.phase == GamePhase::Running {
            self.direction_queue.push_back(direction);
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Skipped;
        }

        self.tick_count += 1;
        self.resolve_direction();

        let next_head = self.snake.head().step(self.snake.direction());
        if self.grid.is_out_of_bounds(next_head) {
            return self.finish(GameOverReason::WallCollision);
        }
        if self.snake.occupies(next_head) {
            return self.finish(GameOverReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if self.food != Some(next_head) {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.score = u32::try_from(self.snake.len().saturating_sub(INITIAL_SNAKE_LENGTH))
            .unwrap_or(u32::MAX);

        self.food = spawn_food(&mut self.rng, self.grid, &self.snake);
        if self.food.is_none() {
            return self.finish(GameOverReason::BoardFull);
        }

        if self.interval_ms > FASTEST_INTERVAL_MS {
            self.interval_ms = self
                .interval_ms
                .saturating_sub(SPEED_INCREMENT_MS)
                .max(FASTEST_INTERVAL_MS);
        }

        debug!(
            "ate food at {next_head}: score {} interval {}ms",
            self.score, self.interval_ms
        );
        TickOutcome::Ate
    }

    /// Idle or Paused -> Running. No-op when already running or over.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Idle | GamePhase::Paused => self.set_phase(GamePhase::Running),
            GamePhase::Running | GamePhase::GameOver => {}
        }
    }

    /// Running -> Paused.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Running {
            self.set_phase(GamePhase::Paused);
        }
    }

    /// Paused -> Running. No-op in any other phase.
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.set_phase(GamePhase::Running);
        }
    }

    /// Flips between Running and Paused; other phases are untouched.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::Idle | GamePhase::GameOver => {}
        }
    }

    /// Resets every field to its starting value and returns to Idle.
    ///
    /// The random stream carries on, so consecutive games differ even with a seed.
    pub fn restart(&mut self) {
        let rng = self.rng.clone();
        *self = Self::from_rng(self.grid, rng);
        info!("game restarted");
    }

    /// Returns the cells the snake does not occupy.
    #[must_use]
    pub fn vacant_cells(&self) -> Vec<Cell> {
        vacant_cells(self.grid, &self.snake)
    }

    /// Classifies one cell for the renderer.
    #[must_use]
    pub fn cell_kind(&self, cell: Cell) -> CellKind {
        if self.food == Some(cell) {
            CellKind::Food
        } else if self.snake.head() == cell {
            CellKind::Head
        } else if self.snake.occupies(cell) {
            CellKind::Body
        } else {
            CellKind::Empty
        }
    }

    /// Current tick interval.
    #[must_use]
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    #[must_use]
    pub fn queued_directions(&self) -> &VecDeque<Direction> {
        &self.direction_queue
    }

    #[must_use]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    /// Overrides the tick interval, clamped to the configured range.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.clamp(FASTEST_INTERVAL_MS, SLOWEST_INTERVAL_MS);
    }

    /// Pops queued directions until one is not a reversal of the current heading.
    fn resolve_direction(&mut self) {
        let current = self.snake.direction();
        while let Some(candidate) = self.direction_queue.pop_front() {
            if direction_change_is_valid(current, candidate) {
                self.snake.set_direction(candidate);
                return;
            }
        }
    }

    fn finish(&mut self, reason: GameOverReason) -> TickOutcome {
        self.game_over_reason = Some(reason);
        self.set_phase(GamePhase::GameOver);
        info!(
            "game over ({reason:?}) after {} ticks, score {}",
            self.tick_count, self.score
        );
        TickOutcome::GameOver(reason)
    }

    fn set_phase(&mut self, phase: GamePhase) {
        debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

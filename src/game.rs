use std::fmt;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, SCORE_PER_FOOD, START_CELL, START_FOOD_CELL};
use crate::input::{Direction, Heading};
use crate::placement::{place_food, place_obstacles};
use crate::snake::{Position, Snake};
use crate::stage::Stage;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Active,
    GameOver,
}

/// What ended a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    ObstacleCollision,
}

/// Final result surfaced to the player when a game ends.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOverReport {
    pub score: u32,
    pub stage: Stage,
    pub reason: DeathReason,
}

impl GameOverReport {
    /// Returns `Score: <score> | Stage: <stage>`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Score: {} | Stage: {}", self.score, self.stage)
    }
}

impl fmt::Display for GameOverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game Over! {}", self.summary())
    }
}

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// No heading yet, or the game is not active.
    Idle,
    Moved,
    /// Food was eaten; carries the stage entered on this tick, if any.
    Ate { promoted: Option<Stage> },
    GameOver(GameOverReport),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub obstacles: Vec<Position>,
    pub heading: Heading,
    pub score: u32,
    pub stage: Stage,
    pub tick_count: u64,
    pub status: GameStatus,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh state with an entropy-seeded placement source.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Self {
        Self {
            snake: Snake::new(START_CELL),
            food: START_FOOD_CELL,
            obstacles: Vec::new(),
            heading: Heading::STILL,
            score: 0,
            stage: Stage::One,
            tick_count: 0,
            status: GameStatus::Active,
            bounds,
            rng,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Time between ticks at the current stage.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.stage.tick_interval()
    }

    /// Applies one direction key press. Reversals along the current axis are ignored.
    pub fn apply_input(&mut self, direction: Direction) {
        self.heading = self.heading.steered(direction);
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Food is resolved before collisions are checked, so a fatal move onto
    /// food still counts its points in the final report.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_active() || self.heading.is_still() {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        let new_head = self.snake.head().step(self.heading);
        self.snake.push_head(new_head);

        let outcome = if new_head == self.food {
            self.score += SCORE_PER_FOOD;
            self.food = place_food(&mut self.rng, self.bounds, &self.snake, &self.obstacles);
            TickOutcome::Ate {
                promoted: self.check_stage_progression(),
            }
        } else {
            let _ = self.snake.pop_tail();
            TickOutcome::Moved
        };

        if let Some(reason) = self.collision_at(new_head) {
            return TickOutcome::GameOver(self.game_over(reason));
        }

        log::debug!(
            "tick {}: head ({}, {}), length {}",
            self.tick_count,
            new_head.x,
            new_head.y,
            self.snake.len()
        );
        outcome
    }

    /// Restores the initial configuration and reactivates the game.
    ///
    /// The placement source keeps its state so later games differ.
    pub fn reset(&mut self) {
        self.snake = Snake::new(START_CELL);
        self.food = START_FOOD_CELL;
        self.obstacles.clear();
        self.heading = Heading::STILL;
        self.score = 0;
        self.stage = Stage::One;
        self.tick_count = 0;
        self.status = GameStatus::Active;

        log::info!("game reset");
    }

    fn collision_at(&self, head: Position) -> Option<DeathReason> {
        if !self.bounds.contains(head) {
            Some(DeathReason::WallCollision)
        } else if self.snake.head_overlaps_body() {
            Some(DeathReason::SelfCollision)
        } else if self.obstacles.contains(&head) {
            Some(DeathReason::ObstacleCollision)
        } else {
            None
        }
    }

    fn game_over(&mut self, reason: DeathReason) -> GameOverReport {
        self.status = GameStatus::GameOver;
        let report = GameOverReport {
            score: self.score,
            stage: self.stage,
            reason,
        };

        log::info!("{report} ({reason:?})");
        report
    }

    fn check_stage_progression(&mut self) -> Option<Stage> {
        let next = self.stage.promotion(self.score)?;

        self.stage = next;
        self.obstacles = place_obstacles(
            &mut self.rng,
            self.bounds,
            next.obstacle_count(),
            &self.snake,
            self.food,
        );

        log::info!(
            "entered stage {next} at score {}: {} obstacles, {:?} per tick",
            self.score,
            self.obstacles.len(),
            next.tick_interval()
        );
        Some(next)
    }
}

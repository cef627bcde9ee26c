//! Time-gated driver that runs the simulation at the stage's pace.
//!
//! The driver is called once per frame with a monotonic timestamp. At most
//! one simulation step runs per frame; missed ticks are never replayed.

use std::time::Duration;

use crate::game::{GameOverReport, GameState, TickOutcome};

/// Display collaborator fed by the game loop.
pub trait Renderer {
    type Error;

    /// Paints the current board, score and stage.
    fn render(&mut self, state: &GameState) -> Result<(), Self::Error>;

    /// Shows the game-over message and blocks until the player dismisses it.
    fn notify_game_over(
        &mut self,
        state: &GameState,
        report: &GameOverReport,
    ) -> Result<(), Self::Error>;
}

/// Remembers when the last tick ran and decides whether the next one is due.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ticker {
    last_tick: Option<Duration>,
}

impl Ticker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when strictly more than `interval` has passed since the
    /// last tick, and records `now` as the new reference.
    ///
    /// The first call only establishes the reference point.
    pub fn is_due(&mut self, now: Duration, interval: Duration) -> bool {
        let last = *self.last_tick.get_or_insert(now);
        if now.saturating_sub(last) > interval {
            self.last_tick = Some(now);
            true
        } else {
            false
        }
    }
}

/// What one frame callback did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FrameOutcome {
    /// The game is not active; nothing ran.
    Halted,
    /// Not enough time has passed for a tick.
    Waiting,
    /// One simulation step and one render ran.
    Ticked(TickOutcome),
}

/// Drives [`GameState::tick`] from frame callbacks.
#[derive(Debug, Default)]
pub struct GameLoop {
    ticker: Ticker,
}

impl GameLoop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one frame at monotonic time `now`.
    ///
    /// A tick that ends the game notifies the renderer, resets the state and
    /// renders the fresh board before returning.
    pub fn frame<R: Renderer>(
        &mut self,
        now: Duration,
        state: &mut GameState,
        renderer: &mut R,
    ) -> Result<FrameOutcome, R::Error> {
        if !state.is_active() {
            return Ok(FrameOutcome::Halted);
        }

        if !self.ticker.is_due(now, state.tick_interval()) {
            return Ok(FrameOutcome::Waiting);
        }

        let outcome = state.tick();
        if let TickOutcome::GameOver(report) = &outcome {
            renderer.notify_game_over(state, report)?;
            state.reset();
        }

        renderer.render(state)?;
        Ok(FrameOutcome::Ticked(outcome))
    }
}

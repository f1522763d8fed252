use std::time::Instant;

use log::debug;

use crate::game::{GamePhase, GameState, TickOutcome};
use crate::input::GameInput;
use crate::ticker::Ticker;

/// Couples the game state with its tick schedule.
///
/// The ticker only runs while the game is running. Eating food re-arms it
/// with the new, shorter period.
#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    ticker: Ticker,
}

/// Whether the loop should keep going after an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Session {
    #[must_use]
    pub fn new(state: GameState) -> Self {
        let ticker = Ticker::new(state.speed());
        Self { state, ticker }
    }

    #[must_use]
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Applies one input event at `now`.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> Flow {
        match input {
            GameInput::Quit => return Flow::Quit,
            GameInput::Direction(direction) => self.state.enqueue_direction(direction),
            GameInput::Start if self.state.phase == GamePhase::GameOver => self.restart(),
            GameInput::Start => self.state.start(),
            GameInput::Pause => self.state.toggle_pause(),
            GameInput::Restart => self.restart(),
        }

        self.sync_ticker(now);
        Flow::Continue
    }

    /// Runs one tick if the schedule says one is due.
    pub fn advance(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.ticker.is_due(now) {
            return None;
        }

        let outcome = self.state.tick();
        match outcome {
            TickOutcome::Moved => self.ticker.mark_ticked(now),
            TickOutcome::Ate => {
                self.ticker.reschedule(self.state.speed(), now);
                debug!("tick period now {:?}", self.ticker.period());
            }
            TickOutcome::GameOver(_) | TickOutcome::Skipped => self.ticker.suspend(),
        }

        Some(outcome)
    }

    fn restart(&mut self) {
        self.ticker.suspend();
        self.state.restart();
        self.state.start();
    }

    fn sync_ticker(&mut self, now: Instant) {
        if self.state.phase != GamePhase::Running {
            self.ticker.suspend();
        } else if !self.ticker.is_armed() {
            self.ticker.reschedule(self.state.speed(), now);
        }
    }
}

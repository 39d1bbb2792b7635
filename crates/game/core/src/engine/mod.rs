//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! rejects everything once the game is over, drives the transition phases,
//! and reports a typed error or an [`ExecutionOutcome`] for every action.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult};
use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::GameState;

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Action-specific result (move summary, hits, enemy phase log).
    pub action_result: ActionResult,

    /// Notifications derived from the result, in resolution order.
    pub events: Vec<GameEvent>,
}

impl ExecutionOutcome {
    pub fn hero_defeated(&self) -> bool {
        self.events.iter().any(GameEvent::is_defeat)
    }
}

/// Game engine that validates and applies actions against a borrowed state.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action by routing it through the transition pipeline.
    ///
    /// A rejection in `pre_validate` (or because the game is over) leaves the
    /// state untouched and does not advance the action nonce.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        if self.state.turn.is_over() {
            return Err(ExecuteError::GameOver {
                turn: self.state.turn.number,
            });
        }

        let action_result = transition::execute_transition(action, self.state, &env)?;

        self.state.turn.action_nonce += 1;

        let events = action_result.events();
        Ok(ExecutionOutcome {
            action_result,
            events,
        })
    }
}

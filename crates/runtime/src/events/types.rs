//! Event payloads for the action and turn topics.

use game_core::{Action, ErrorSeverity, TransitionPhase, TurnPhase};
use serde::{Deserialize, Serialize};

/// Outcome of an action submitted to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEvent {
    /// The action was accepted and applied.
    Executed { action: Action, nonce: u64 },

    /// The action was refused; the state is unchanged unless `phase` is past
    /// `pre_validate`.
    Rejected {
        action: Action,
        phase: Option<TransitionPhase>,
        severity: ErrorSeverity,
        code: String,
        error: String,
    },
}

impl ActionEvent {
    pub fn action(&self) -> &Action {
        match self {
            ActionEvent::Executed { action, .. } | ActionEvent::Rejected { action, .. } => action,
        }
    }
}

/// Turn bookkeeping after an end-of-turn resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub turn: u32,
    pub phase: TurnPhase,
}

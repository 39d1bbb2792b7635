//! Error types for action execution pipeline.

use crate::action::{AttackError, MoveError, TurnError};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<MoveError>),

    #[error("attack action failed: {0}")]
    Attack(TransitionPhaseError<AttackError>),

    #[error("end turn action failed: {0}")]
    EndTurn(TransitionPhaseError<TurnError>),

    #[error("the game is over: the hero fell on turn {turn}")]
    GameOver { turn: u32 },
}

impl ExecuteError {
    /// Pipeline stage that rejected the action, if it got that far.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            ExecuteError::Move(inner) => Some(inner.phase),
            ExecuteError::Attack(inner) => Some(inner.phase),
            ExecuteError::EndTurn(inner) => Some(inner.phase),
            ExecuteError::GameOver { .. } => None,
        }
    }

    /// True when the action was refused before touching the state.
    pub fn is_rejection(&self) -> bool {
        matches!(self.phase(), None | Some(TransitionPhase::PreValidate))
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Move(inner) => inner.error.severity(),
            ExecuteError::Attack(inner) => inner.error.severity(),
            ExecuteError::EndTurn(inner) => inner.error.severity(),
            ExecuteError::GameOver { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Move(inner) => inner.error.error_code(),
            ExecuteError::Attack(inner) => inner.error.error_code(),
            ExecuteError::EndTurn(inner) => inner.error.error_code(),
            ExecuteError::GameOver { .. } => "GAME_OVER",
        }
    }
}

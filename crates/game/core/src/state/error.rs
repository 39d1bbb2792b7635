//! Scenario initialization errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Kind of object whose placement failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Placement {
    Hero,
    Enemy,
    Wall,
    #[strum(serialize = "healing spot")]
    HealingSpot,
}

/// Reasons a scenario cannot be turned into a [`super::GameState`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    #[error("{what} at {position} is outside the grid")]
    OutOfBounds {
        what: Placement,
        position: Position,
    },

    #[error("{what} at {position} is placed on a wall")]
    OnWall {
        what: Placement,
        position: Position,
    },

    #[error("{what} at {position} overlaps another unit")]
    Overlapping {
        what: Placement,
        position: Position,
    },

    #[error("{what} at {position} has {current} hp but max hp {maximum}")]
    InvalidHitPoints {
        what: Placement,
        position: Position,
        current: u32,
        maximum: u32,
    },

    #[error("hero move budget must be at least 1")]
    NoMoveBudget,
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            OutOfBounds { .. } => "INIT_OUT_OF_BOUNDS",
            OnWall { .. } => "INIT_ON_WALL",
            Overlapping { .. } => "INIT_OVERLAPPING",
            InvalidHitPoints { .. } => "INIT_INVALID_HIT_POINTS",
            NoMoveBudget => "INIT_NO_MOVE_BUDGET",
        }
    }
}

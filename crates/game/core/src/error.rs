//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`MoveError`, `AttackError`, ...) live next to the
//! actions they validate. This module provides the shared classification.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the action is legal in general but not right now (no
///   moves left, target tile taken). A different action may succeed.
/// - **Validation**: the input itself is malformed (off-grid destination,
///   not a single step).
/// - **Internal**: the state broke one of its own invariants.
/// - **Fatal**: the game is over and no action can succeed again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug rather than a rejected input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// Implementors use `#[derive(thiserror::Error)]` for Display and supply a
/// stable `error_code()` per variant for logs and tests.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

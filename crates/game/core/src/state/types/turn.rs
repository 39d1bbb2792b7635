use std::fmt;

/// Phase of the round state machine.
///
/// The enemy phase is never observable from outside: it runs as one atomic
/// batch inside the end-turn action and hands control straight back to the
/// hero (or into `Defeated`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    /// The hero may move and attack until the budget runs out or the turn ends.
    #[default]
    HeroPhase,
    /// Terminal: the hero has fallen and every further action is rejected.
    Defeated,
}

impl TurnPhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HeroPhase => "hero_phase",
            Self::Defeated => "defeated",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Defeated)
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Round counter, starting at 1.
    pub number: u32,

    pub phase: TurnPhase,

    /// Sequential identifier that increments with every accepted action.
    #[cfg_attr(feature = "serde", serde(default))]
    pub action_nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            number: 1,
            phase: TurnPhase::HeroPhase,
            action_nonce: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

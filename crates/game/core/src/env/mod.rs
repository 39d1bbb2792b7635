//! Read-only collaborators consulted while executing actions.
//!
//! [`GameEnv`] bundles the rule configuration and the RNG oracle. Neither is
//! part of [`crate::state::GameState`]; both are supplied by the caller on
//! every `execute()`.
mod rng;
mod scenario;

pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};
pub use scenario::{EnemySpec, HeroSpec, Scenario};

use crate::config::GameConfig;

/// Borrowed environment passed to every transition.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl std::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

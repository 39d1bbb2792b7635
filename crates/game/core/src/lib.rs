//! Deterministic tactics rules shared by the runtime and the client.
//!
//! `game-core` defines the canonical rules (grid geometry, movement, combat,
//! the turn cycle) and exposes pure APIs with no I/O. All state mutation
//! flows through [`engine::GameEngine`], and supporting crates depend on the
//! types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod grid;
pub mod state;

pub use action::{
    Action, ActionKind, ActionResult, ActionTransition, AttackError, AttackStyle, AttackSummary,
    EndTurnAction, EnemyAction, EnemyIntent, HealOutcome, HeroInvariant, Hit, MeleeAttackAction,
    MoveByAction, MoveError, MoveSummary, MoveToAction, RangedAttackAction, TurnError,
    TurnSummary, reachable_destinations,
};
pub use config::{
    EnemyTemplate, GameConfig, HealingPolicy, RangedCostPolicy, SightPolicy, SpawnRules,
};
pub use engine::{
    ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError,
};
pub use env::{EnemySpec, GameEnv, HeroSpec, PcgRng, RngOracle, Scenario};
pub use error::{ErrorSeverity, GameError};
pub use event::GameEvent;
pub use state::{
    Enemy, EntitiesState, EntityId, GameState, HealingSpot, Hero, InitializationError, Placement,
    Position, ResourceMeter, TurnPhase, TurnState, WorldState,
};

//! Hero attacks: melee against every adjacent enemy, ranged volleys along
//! lines of sight.

use crate::action::{ActionKind, ActionTransition};
use crate::combat::apply_damage;
use crate::config::{RangedCostPolicy, SightPolicy};
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::grid;
use crate::state::{EntityId, GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error("hero has no moves left this turn")]
    NoMovesLeft,

    #[error("no enemy can be hit with a {0} attack")]
    NoTargets(AttackStyle),

    #[error("defeated enemy {0} is still on the grid")]
    DeadEnemyRemains(EntityId),

    #[error("move budget above maximum after attack")]
    BudgetOverflow,
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        use AttackError::*;
        match self {
            NoMovesLeft | NoTargets(_) => ErrorSeverity::Recoverable,
            DeadEnemyRemains(_) | BudgetOverflow => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use AttackError::*;
        match self {
            NoMovesLeft => "ATTACK_NO_MOVES_LEFT",
            NoTargets(_) => "ATTACK_NO_TARGETS",
            DeadEnemyRemains(_) => "ATTACK_DEAD_ENEMY_REMAINS",
            BudgetOverflow => "ATTACK_BUDGET_OVERFLOW",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackStyle {
    Melee,
    Ranged,
}

/// One enemy struck by an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    pub target: EntityId,
    pub position: Position,
    pub damage: u32,
    pub hp_after: u32,
    /// The enemy reached zero hit points and was removed.
    pub killed: bool,
}

/// Result of an accepted attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackSummary {
    pub style: AttackStyle,
    /// Hits in enemy order.
    pub hits: Vec<Hit>,
    /// Move points spent.
    pub cost: u32,
    pub moves_left: u32,
}

impl AttackSummary {
    pub fn kills(&self) -> impl Iterator<Item = &Hit> {
        self.hits.iter().filter(|hit| hit.killed)
    }
}

/// Enemies standing exactly one tile away from the hero.
pub fn melee_targets(state: &GameState) -> Vec<EntityId> {
    let hero = state.hero().position;
    state
        .enemies()
        .iter()
        .filter(|enemy| grid::manhattan_distance(hero, enemy.position) == 1)
        .map(|enemy| enemy.id)
        .collect()
}

/// Enemies within the hero's ranged range and in line of sight.
pub fn ranged_targets(state: &GameState, sight: SightPolicy) -> Vec<EntityId> {
    let hero = state.hero();
    state
        .enemies()
        .iter()
        .filter(|enemy| grid::manhattan_distance(hero.position, enemy.position) <= hero.ranged_range)
        .filter(|enemy| grid::has_line_of_sight(&state.world, hero.position, enemy.position, sight))
        .map(|enemy| enemy.id)
        .collect()
}

/// Strikes every adjacent enemy. Costs nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAttackAction;

impl ActionTransition for MeleeAttackAction {
    type Error = AttackError;
    type Result = AttackSummary;

    fn kind(&self) -> ActionKind {
        ActionKind::MeleeAttack
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if melee_targets(state).is_empty() {
            return Err(AttackError::NoTargets(AttackStyle::Melee));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
    ) -> Result<AttackSummary, Self::Error> {
        let targets = melee_targets(state);
        let power = state.hero().melee_power;
        let hits = targets
            .into_iter()
            .filter_map(|target| strike(state, target, power))
            .collect();
        state.entities.remove_dead();

        Ok(AttackSummary {
            style: AttackStyle::Melee,
            hits,
            cost: 0,
            moves_left: state.hero().moves,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_no_dead_enemies(state)
    }
}

/// Fires at every enemy in range and sight.
///
/// Requires at least one move point. The cost model is chosen by
/// [`RangedCostPolicy`]; under `PerTarget` the volley stops once the budget
/// is exhausted, so later enemies in the list may be spared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangedAttackAction;

impl ActionTransition for RangedAttackAction {
    type Error = AttackError;
    type Result = AttackSummary;

    fn kind(&self) -> ActionKind {
        ActionKind::RangedAttack
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !state.hero().has_moves() {
            return Err(AttackError::NoMovesLeft);
        }
        if ranged_targets(state, env.config().sight).is_empty() {
            return Err(AttackError::NoTargets(AttackStyle::Ranged));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<AttackSummary, Self::Error> {
        let targets = ranged_targets(state, env.config().sight);
        let power = state.hero().ranged_power;
        let policy = env.config().ranged_cost;

        let mut hits = Vec::with_capacity(targets.len());
        let mut cost = 0;
        for target in targets {
            if policy == RangedCostPolicy::PerTarget {
                if !state.hero().has_moves() {
                    break;
                }
                state.entities.hero.moves -= 1;
                cost += 1;
            }
            hits.extend(strike(state, target, power));
        }
        if policy == RangedCostPolicy::PerActivation {
            state.entities.hero.moves -= 1;
            cost = 1;
        }
        state.entities.remove_dead();

        Ok(AttackSummary {
            style: AttackStyle::Ranged,
            hits,
            cost,
            moves_left: state.hero().moves,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.hero().moves > state.hero().max_moves {
            return Err(AttackError::BudgetOverflow);
        }
        check_no_dead_enemies(state)
    }
}

fn strike(state: &mut GameState, target: EntityId, power: u32) -> Option<Hit> {
    let enemy = state.entities.enemy_mut(target)?;
    let damage = apply_damage(&mut enemy.hp, power);
    Some(Hit {
        target,
        position: enemy.position,
        damage,
        hp_after: enemy.hp.current,
        killed: enemy.is_dead(),
    })
}

fn check_no_dead_enemies(state: &GameState) -> Result<(), AttackError> {
    match state.enemies().iter().find(|enemy| enemy.is_dead()) {
        Some(enemy) => Err(AttackError::DeadEnemyRemains(enemy.id)),
        None => Ok(()),
    }
}

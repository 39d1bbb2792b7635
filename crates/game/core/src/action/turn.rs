//! End of the hero phase: enemy phase, reinforcements, and the next round.

use crate::action::enemy::{EnemyIntent, decide};
use crate::action::{ActionKind, ActionTransition};
use crate::combat::apply_damage;
use crate::env::{GameEnv, RollContext, compute_seed};
use crate::error::{ErrorSeverity, GameError};
use crate::grid;
use crate::state::{EntityId, GameState, Position, TurnPhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("turn {turn} did not restore the move budget")]
    BudgetNotRestored { turn: u32 },

    #[error("enemy {0} ended the enemy phase on a blocked tile")]
    EnemyOnBlockedTile(EntityId),

    #[error("hero has no hit points but the game is not over")]
    DefeatNotRecorded,
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        use TurnError::*;
        match self {
            BudgetNotRestored { .. } => "TURN_BUDGET_NOT_RESTORED",
            EnemyOnBlockedTile(_) => "TURN_ENEMY_ON_BLOCKED_TILE",
            DefeatNotRecorded => "TURN_DEFEAT_NOT_RECORDED",
        }
    }
}

/// What a single enemy did during the enemy phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyAction {
    Attacked {
        enemy: EntityId,
        damage: u32,
        hero_hp_after: u32,
    },
    Moved {
        enemy: EntityId,
        from: Position,
        to: Position,
    },
    Held {
        enemy: EntityId,
    },
}

/// Result of an accepted end-turn action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSummary {
    /// The round that just ended.
    pub ended_turn: u32,
    /// Enemy actions in the order they were resolved.
    pub enemy_actions: Vec<EnemyAction>,
    /// Reinforcement that appeared after the enemy phase.
    pub spawned: Option<(EntityId, Position)>,
    /// Set when the hero fell; the game is over and no new round starts.
    pub hero_defeated: bool,
    /// Round number the hero now plays, unless defeated.
    pub next_turn: Option<u32>,
}

/// Hands control to the enemies, then starts the next round.
///
/// The enemy phase runs as one batch. If an enemy drops the hero to zero hit
/// points the remaining enemies do not act, the state enters
/// [`TurnPhase::Defeated`], and the round counter stays where it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndTurnAction;

impl ActionTransition for EndTurnAction {
    type Error = TurnError;
    type Result = TurnSummary;

    fn kind(&self) -> ActionKind {
        ActionKind::EndTurn
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<TurnSummary, Self::Error> {
        let mut summary = TurnSummary {
            ended_turn: state.turn.number,
            ..TurnSummary::default()
        };

        run_enemy_phase(state, env, &mut summary);
        if summary.hero_defeated {
            state.turn.phase = TurnPhase::Defeated;
            return Ok(summary);
        }

        summary.spawned = spawn_reinforcement(state, env);

        state.turn.number += 1;
        state.entities.hero.moves = state.entities.hero.max_moves;
        summary.next_turn = Some(state.turn.number);

        Ok(summary)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if let Some(enemy) = state
            .enemies()
            .iter()
            .find(|enemy| grid::is_blocked(&state.world, enemy.position))
        {
            return Err(TurnError::EnemyOnBlockedTile(enemy.id));
        }

        let hero = state.hero();
        if hero.is_dead() {
            if state.turn.phase != TurnPhase::Defeated {
                return Err(TurnError::DefeatNotRecorded);
            }
        } else if hero.moves != hero.max_moves {
            return Err(TurnError::BudgetNotRestored {
                turn: state.turn.number,
            });
        }
        Ok(())
    }
}

fn run_enemy_phase(state: &mut GameState, env: &GameEnv<'_>, summary: &mut TurnSummary) {
    let sight = env.config().sight;

    for index in 0..state.entities.enemies.len() {
        let hero_position = state.entities.hero.position;
        let enemy = &state.entities.enemies[index];
        let id = enemy.id;

        match decide(enemy, hero_position, &state.world, sight) {
            EnemyIntent::Attack { damage } => {
                let hero = &mut state.entities.hero;
                let dealt = apply_damage(&mut hero.hp, damage);
                summary.enemy_actions.push(EnemyAction::Attacked {
                    enemy: id,
                    damage: dealt,
                    hero_hp_after: hero.hp.current,
                });
                if hero.is_dead() {
                    summary.hero_defeated = true;
                    return;
                }
            }
            EnemyIntent::Step { to } => {
                let enemy = &mut state.entities.enemies[index];
                let from = enemy.position;
                enemy.position = to;
                summary
                    .enemy_actions
                    .push(EnemyAction::Moved { enemy: id, from, to });
            }
            EnemyIntent::Hold => {
                summary.enemy_actions.push(EnemyAction::Held { enemy: id });
            }
        }
    }
}

/// Rolls for a reinforcement and places it on a random free spawn point.
fn spawn_reinforcement(state: &mut GameState, env: &GameEnv<'_>) -> Option<(EntityId, Position)> {
    let config = env.config();
    let rules = &config.spawn;
    if !rules.is_enabled() {
        return None;
    }

    let turn = state.turn.number;
    let roll = env
        .rng()
        .roll_d100(compute_seed(config.game_seed, turn, RollContext::SpawnChance));
    if roll > rules.chance_percent {
        return None;
    }

    let free: Vec<Position> = rules
        .points
        .iter()
        .copied()
        .filter(|point| {
            !grid::is_blocked(&state.world, *point) && !state.entities.is_occupied(*point)
        })
        .collect();
    if free.is_empty() {
        return None;
    }

    let index = env.rng().range(
        compute_seed(config.game_seed, turn, RollContext::SpawnPoint),
        0,
        free.len() as u32 - 1,
    ) as usize;
    let position = free[index];
    let id = state.spawn_enemy(position, &rules.template);
    Some((id, position))
}

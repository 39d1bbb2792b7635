//! Action domain.
//!
//! Every player intent is a small transition type implementing
//! [`ActionTransition`]. The engine drives each one through
//! `pre_validate → apply → post_validate`:
//!
//! - `movement`: single steps and budgeted jumps, healing-spot triggers
//! - `combat`: melee and ranged attacks
//! - `turn`: end of turn, enemy phase, reinforcements
//! - `enemy`: the enemy decision rule

pub mod combat;
pub mod enemy;
pub mod movement;
pub mod turn;

pub use combat::{
    AttackError, AttackStyle, AttackSummary, Hit, MeleeAttackAction, RangedAttackAction,
    melee_targets, ranged_targets,
};
pub use enemy::EnemyIntent;
pub use movement::{
    HealOutcome, HeroInvariant, MoveByAction, MoveError, MoveSummary, MoveToAction,
    reachable_destinations,
};
pub use turn::{EndTurnAction, EnemyAction, TurnError, TurnSummary};

use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::{GameState, Position};

/// Defines how a concrete action variant mutates game state.
pub trait ActionTransition {
    type Error;
    type Result;

    fn kind(&self) -> ActionKind;

    /// Validates pre-conditions using the state **before** mutation.
    ///
    /// A rejection here guarantees the state was not touched.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Discriminant of [`Action`], used for logging and key bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    MoveBy,
    MoveTo,
    MeleeAttack,
    RangedAttack,
    EndTurn,
}

impl ActionKind {
    pub fn as_snake_case(&self) -> &'static str {
        self.into()
    }
}

/// Everything the hero can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    MoveBy(MoveByAction),
    MoveTo(MoveToAction),
    MeleeAttack(MeleeAttackAction),
    RangedAttack(RangedAttackAction),
    EndTurn(EndTurnAction),
}

impl Action {
    pub fn move_by(dx: i32, dy: i32) -> Self {
        Self::MoveBy(MoveByAction::new(dx, dy))
    }

    pub fn move_to(x: i32, y: i32) -> Self {
        Self::MoveTo(MoveToAction::new(Position::new(x, y)))
    }

    pub fn melee_attack() -> Self {
        Self::MeleeAttack(MeleeAttackAction)
    }

    pub fn ranged_attack() -> Self {
        Self::RangedAttack(RangedAttackAction)
    }

    pub fn end_turn() -> Self {
        Self::EndTurn(EndTurnAction)
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::MoveBy(action) => action.kind(),
            Action::MoveTo(action) => action.kind(),
            Action::MeleeAttack(action) => action.kind(),
            Action::RangedAttack(action) => action.kind(),
            Action::EndTurn(action) => action.kind(),
        }
    }

    pub fn as_snake_case(&self) -> &'static str {
        self.kind().as_snake_case()
    }
}

/// Action-specific outcome returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Move(MoveSummary),
    Attack(AttackSummary),
    EndTurn(TurnSummary),
}

impl ActionResult {
    /// Flattens the outcome into renderer-facing notifications.
    pub fn events(&self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self {
            ActionResult::Move(summary) => {
                events.push(GameEvent::HeroMoved {
                    from: summary.from,
                    to: summary.to,
                    moves_left: summary.moves_left,
                });
                if let Some(heal) = summary.heal {
                    events.push(GameEvent::HeroHealed {
                        position: heal.position,
                        amount: heal.amount,
                        hp: heal.hp_after,
                        spot_consumed: heal.consumed,
                    });
                }
            }
            ActionResult::Attack(summary) => {
                for hit in &summary.hits {
                    events.push(GameEvent::EnemyDamaged {
                        enemy: hit.target,
                        style: summary.style,
                        damage: hit.damage,
                        hp: hit.hp_after,
                    });
                    if hit.killed {
                        events.push(GameEvent::EnemyKilled {
                            enemy: hit.target,
                            position: hit.position,
                        });
                    }
                }
            }
            ActionResult::EndTurn(summary) => {
                for action in &summary.enemy_actions {
                    match *action {
                        EnemyAction::Attacked {
                            enemy,
                            damage,
                            hero_hp_after,
                        } => events.push(GameEvent::HeroDamaged {
                            enemy,
                            damage,
                            hp: hero_hp_after,
                        }),
                        EnemyAction::Moved { enemy, from, to } => {
                            events.push(GameEvent::EnemyMoved { enemy, from, to })
                        }
                        EnemyAction::Held { .. } => {}
                    }
                }
                if summary.hero_defeated {
                    events.push(GameEvent::HeroDefeated {
                        turn: summary.ended_turn,
                    });
                }
                if let Some((enemy, position)) = summary.spawned {
                    events.push(GameEvent::EnemySpawned { enemy, position });
                }
                if let Some(number) = summary.next_turn {
                    events.push(GameEvent::TurnStarted { number });
                }
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityId;
    use strum::IntoEnumIterator;

    #[test]
    fn kinds_have_snake_case_names() {
        let names: Vec<&str> = ActionKind::iter().map(|kind| kind.as_snake_case()).collect();
        assert_eq!(
            names,
            vec!["move_by", "move_to", "melee_attack", "ranged_attack", "end_turn"]
        );
        assert_eq!(Action::move_to(1, 2).as_snake_case(), "move_to");
    }

    #[test]
    fn defeat_summary_emits_defeat_and_no_new_turn() {
        let result = ActionResult::EndTurn(TurnSummary {
            ended_turn: 4,
            enemy_actions: vec![EnemyAction::Attacked {
                enemy: EntityId(2),
                damage: 1,
                hero_hp_after: 0,
            }],
            spawned: None,
            hero_defeated: true,
            next_turn: None,
        });

        assert_eq!(
            result.events(),
            vec![
                GameEvent::HeroDamaged {
                    enemy: EntityId(2),
                    damage: 1,
                    hp: 0
                },
                GameEvent::HeroDefeated { turn: 4 },
            ]
        );
    }
}

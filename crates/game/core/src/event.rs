//! Notifications produced by accepted actions.
//!
//! Events describe what happened, in resolution order, so a renderer can
//! narrate a turn without diffing states.

use std::fmt;

use crate::action::AttackStyle;
use crate::state::{EntityId, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    HeroMoved {
        from: Position,
        to: Position,
        moves_left: u32,
    },
    HeroHealed {
        position: Position,
        amount: u32,
        hp: u32,
        spot_consumed: bool,
    },
    EnemyDamaged {
        enemy: EntityId,
        style: AttackStyle,
        damage: u32,
        hp: u32,
    },
    EnemyKilled {
        enemy: EntityId,
        position: Position,
    },
    HeroDamaged {
        enemy: EntityId,
        damage: u32,
        hp: u32,
    },
    EnemyMoved {
        enemy: EntityId,
        from: Position,
        to: Position,
    },
    EnemySpawned {
        enemy: EntityId,
        position: Position,
    },
    /// The hero reached zero hit points; the game is over.
    HeroDefeated { turn: u32 },
    TurnStarted { number: u32 },
}

impl GameEvent {
    pub fn is_defeat(&self) -> bool {
        matches!(self, GameEvent::HeroDefeated { .. })
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::HeroMoved { to, moves_left, .. } => {
                write!(f, "Hero moves to {to} ({moves_left} moves left)")
            }
            GameEvent::HeroHealed { amount, hp, .. } => {
                write!(f, "Hero heals {amount} (hp {hp})")
            }
            GameEvent::EnemyDamaged {
                enemy,
                style,
                damage,
                hp,
            } => write!(f, "{style} hit on enemy {enemy} for {damage} (hp {hp})"),
            GameEvent::EnemyKilled { enemy, .. } => write!(f, "Enemy {enemy} is slain"),
            GameEvent::HeroDamaged { enemy, damage, hp } => {
                write!(f, "Enemy {enemy} shoots the hero for {damage} (hp {hp})")
            }
            GameEvent::EnemyMoved { enemy, to, .. } => write!(f, "Enemy {enemy} advances to {to}"),
            GameEvent::EnemySpawned { enemy, position } => {
                write!(f, "Enemy {enemy} appears at {position}")
            }
            GameEvent::HeroDefeated { turn } => {
                write!(f, "Game over! The hero has fallen on turn {turn}.")
            }
            GameEvent::TurnStarted { number } => write!(f, "Turn {number} begins"),
        }
    }
}

//! Enemy decision rule.
//!
//! Each enemy either shoots the hero (in range and in sight) or takes one
//! greedy step toward the hero. There is no pathfinding and no coordination:
//! enemies may end up sharing a tile with each other or with the hero.

use crate::config::SightPolicy;
use crate::grid;
use crate::state::{Enemy, Position, WorldState};

/// What one enemy will do during the enemy phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyIntent {
    /// Shoot the hero for `damage` hit points.
    Attack { damage: u32 },
    /// Step to `to` (one tile on each axis at most).
    Step { to: Position },
    /// The greedy step is blocked; stay put.
    Hold,
}

/// Decides the action of `enemy` against a hero standing at `hero`.
pub fn decide(
    enemy: &Enemy,
    hero: Position,
    world: &WorldState,
    sight: SightPolicy,
) -> EnemyIntent {
    let distance = grid::manhattan_distance(enemy.position, hero);
    if distance <= enemy.range && grid::has_line_of_sight(world, enemy.position, hero, sight) {
        return EnemyIntent::Attack {
            damage: enemy.ranged_power,
        };
    }

    let to = grid::step_toward(enemy.position, hero);
    if to == enemy.position || grid::is_blocked(world, to) {
        EnemyIntent::Hold
    } else {
        EnemyIntent::Step { to }
    }
}

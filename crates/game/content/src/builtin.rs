//! Scenarios compiled into the binary.

use game_core::{EnemyTemplate, HeroSpec, Position, Scenario};

/// Heal amount of every spot in the skirmish layout.
pub const SKIRMISH_HEAL: u32 = 3;

const SKIRMISH_WALLS: [(i32, i32); 12] = [
    (5, 5),
    (5, 6),
    (6, 5),
    (3, 7),
    (4, 7),
    (2, 5),
    (7, 2),
    (8, 2),
    (1, 8),
    (6, 8),
    (7, 8),
    (8, 8),
];

/// The default opening: a wounded hero, two ranged enemies and two healing spots.
pub fn skirmish() -> Scenario {
    let hero = HeroSpec {
        position: Position::new(2, 2),
        max_moves: 3,
        melee_power: 2,
        ranged_power: 2,
        ranged_range: 3,
        hp: 10,
        max_hp: 12,
    };

    Scenario::new(hero)
        .with_walls(SKIRMISH_WALLS.iter().map(|&(x, y)| Position::new(x, y)))
        .with_enemy(Position::new(7, 7), EnemyTemplate::new(4, 1, 3))
        .with_enemy(Position::new(1, 6), EnemyTemplate::new(3, 1, 3))
        .with_healing_spot(Position::new(0, 5), SKIRMISH_HEAL)
        .with_healing_spot(Position::new(9, 4), SKIRMISH_HEAL)
}

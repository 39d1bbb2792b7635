use crate::config::EnemyTemplate;
use crate::state::{HealingSpot, Position};

/// Blueprint for the entities that exist when a game starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub hero: HeroSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemies: Vec<EnemySpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub healing_spots: Vec<HealingSpot>,
}

impl Scenario {
    /// A scenario containing only the hero.
    pub fn new(hero: HeroSpec) -> Self {
        Self {
            hero,
            walls: Vec::new(),
            enemies: Vec::new(),
            healing_spots: Vec::new(),
        }
    }

    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Position>) -> Self {
        self.walls.extend(walls);
        self
    }

    pub fn with_enemy(mut self, position: Position, template: EnemyTemplate) -> Self {
        self.enemies.push(EnemySpec { position, template });
        self
    }

    pub fn with_healing_spot(mut self, position: Position, heal: u32) -> Self {
        self.healing_spots.push(HealingSpot::new(position, heal));
        self
    }
}

/// Starting stats for the hero. The move budget starts full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroSpec {
    pub position: Position,
    pub max_moves: u32,
    pub melee_power: u32,
    pub ranged_power: u32,
    pub ranged_range: u32,
    pub hp: u32,
    pub max_hp: u32,
}

impl HeroSpec {
    pub fn at(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl Default for HeroSpec {
    fn default() -> Self {
        Self {
            position: Position::ORIGIN,
            max_moves: 3,
            melee_power: 2,
            ranged_power: 2,
            ranged_range: 3,
            hp: 10,
            max_hp: 12,
        }
    }
}

/// Enemy placement; enemies start at full health.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpec {
    pub position: Position,
    pub template: EnemyTemplate,
}

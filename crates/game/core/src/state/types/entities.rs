use super::{EntityId, Position, ResourceMeter};
use crate::config::EnemyTemplate;

/// Aggregate state for every mutable entity on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub hero: Hero,
    /// Live enemies in spawn order. Dead enemies never remain in this list.
    pub enemies: Vec<Enemy>,
    /// Healing spots that can still trigger.
    pub healing_spots: Vec<HealingSpot>,
}

impl EntitiesState {
    pub fn new(hero: Hero, enemies: Vec<Enemy>, healing_spots: Vec<HealingSpot>) -> Self {
        Self {
            hero,
            enemies,
            healing_spots,
        }
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    /// Returns the first live enemy standing on `position`.
    pub fn enemy_at(&self, position: Position) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.position == position)
    }

    pub fn healing_spot_at(&self, position: Position) -> Option<&HealingSpot> {
        self.healing_spots
            .iter()
            .find(|spot| spot.position == position)
    }

    /// True if the hero or any enemy stands on `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.hero.position == position || self.enemy_at(position).is_some()
    }

    /// Drops every enemy whose hit points reached zero and returns their ids.
    pub fn remove_dead(&mut self) -> Vec<EntityId> {
        let mut removed = Vec::new();
        self.enemies.retain(|enemy| {
            if enemy.is_dead() {
                removed.push(enemy.id);
                false
            } else {
                true
            }
        });
        removed
    }
}

/// The single player-controlled unit.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub position: Position,
    /// Move points left this turn. Never exceeds `max_moves`.
    pub moves: u32,
    /// Budget restored at the start of every hero phase.
    pub max_moves: u32,
    pub melee_power: u32,
    pub ranged_power: u32,
    pub ranged_range: u32,
    pub hp: ResourceMeter,
}

impl Hero {
    pub fn is_dead(&self) -> bool {
        self.hp.is_depleted()
    }

    pub fn has_moves(&self) -> bool {
        self.moves > 0
    }
}

/// Hostile unit controlled by the enemy phase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: EntityId,
    pub position: Position,
    pub hp: ResourceMeter,
    pub ranged_power: u32,
    /// Detection and attack range (Manhattan).
    pub range: u32,
}

impl Enemy {
    /// Instantiates a template at full health.
    pub fn from_template(id: EntityId, position: Position, template: &EnemyTemplate) -> Self {
        Self {
            id,
            position,
            hp: ResourceMeter::full(template.max_hp),
            ranged_power: template.ranged_power,
            range: template.range,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp.is_depleted()
    }
}

/// Tile that restores hero hit points on arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealingSpot {
    pub position: Position,
    pub heal: u32,
}

impl HealingSpot {
    pub fn new(position: Position, heal: u32) -> Self {
        Self { position, heal }
    }
}

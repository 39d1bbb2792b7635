//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the hero, enemies,
//! walls, healing spots and turn bookkeeping. Callers read this state freely
//! but mutate it exclusively through the engine.
mod error;
pub mod types;

pub use error::{InitializationError, Placement};
pub use types::{
    EntitiesState, Enemy, EntityId, HealingSpot, Hero, Position, ResourceMeter, TurnPhase,
    TurnState, WorldState,
};

use crate::config::EnemyTemplate;
use crate::env::Scenario;
use crate::grid;

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Sequential enemy ID allocator (monotonically increasing, never reused).
    /// ID 0 is reserved for the hero.
    next_entity_id: u32,

    pub turn: TurnState,
    pub entities: EntitiesState,
    pub world: WorldState,
}

impl GameState {
    /// Builds the opening state of a game, validating every placement.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, InitializationError> {
        let world = WorldState::new(scenario.walls.iter().copied());

        for wall in world.walls() {
            if !grid::in_bounds(wall) {
                return Err(InitializationError::OutOfBounds {
                    what: Placement::Wall,
                    position: wall,
                });
            }
        }

        let spec = &scenario.hero;
        if spec.max_moves == 0 {
            return Err(InitializationError::NoMoveBudget);
        }
        if spec.max_hp == 0 || spec.hp > spec.max_hp {
            return Err(InitializationError::InvalidHitPoints {
                what: Placement::Hero,
                position: spec.position,
                current: spec.hp,
                maximum: spec.max_hp,
            });
        }
        check_placement(&world, Placement::Hero, spec.position)?;

        let hero = Hero {
            position: spec.position,
            moves: spec.max_moves,
            max_moves: spec.max_moves,
            melee_power: spec.melee_power,
            ranged_power: spec.ranged_power,
            ranged_range: spec.ranged_range,
            hp: ResourceMeter::new(spec.hp, spec.max_hp),
        };

        let mut state = Self {
            next_entity_id: 1,
            turn: TurnState::new(),
            entities: EntitiesState::new(hero, Vec::new(), Vec::new()),
            world,
        };

        for enemy in &scenario.enemies {
            check_placement(&state.world, Placement::Enemy, enemy.position)?;
            if enemy.template.max_hp == 0 {
                return Err(InitializationError::InvalidHitPoints {
                    what: Placement::Enemy,
                    position: enemy.position,
                    current: 0,
                    maximum: 0,
                });
            }
            if state.entities.is_occupied(enemy.position) {
                return Err(InitializationError::Overlapping {
                    what: Placement::Enemy,
                    position: enemy.position,
                });
            }
            state.spawn_enemy(enemy.position, &enemy.template);
        }

        for spot in &scenario.healing_spots {
            check_placement(&state.world, Placement::HealingSpot, spot.position)?;
            state.entities.healing_spots.push(*spot);
        }

        Ok(state)
    }

    /// Allocates a new unique enemy id.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        if self.next_entity_id == EntityId::HERO.0 {
            self.next_entity_id += 1;
        }
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self.next_entity_id.wrapping_add(1);
        id
    }

    /// Places a fresh enemy without validation; callers check the cell first.
    pub fn spawn_enemy(&mut self, position: Position, template: &EnemyTemplate) -> EntityId {
        let id = self.allocate_entity_id();
        self.entities
            .enemies
            .push(Enemy::from_template(id, position, template));
        id
    }

    pub fn hero(&self) -> &Hero {
        &self.entities.hero
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.entities.enemies
    }

    pub fn healing_spots(&self) -> &[HealingSpot] {
        &self.entities.healing_spots
    }

    pub fn is_over(&self) -> bool {
        self.turn.is_over()
    }
}

fn check_placement(
    world: &WorldState,
    what: Placement,
    position: Position,
) -> Result<(), InitializationError> {
    if !grid::in_bounds(position) {
        return Err(InitializationError::OutOfBounds { what, position });
    }
    if world.is_wall(position) {
        return Err(InitializationError::OnWall { what, position });
    }
    Ok(())
}

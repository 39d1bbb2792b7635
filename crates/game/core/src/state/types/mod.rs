pub mod common;
pub mod entities;
pub mod turn;
pub mod world;

pub use common::{EntityId, Position, ResourceMeter};
pub use entities::{EntitiesState, Enemy, HealingSpot, Hero};
pub use turn::{TurnPhase, TurnState};
pub use world::WorldState;

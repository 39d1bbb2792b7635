//! Runtime orchestration for the tactics simulation.
//!
//! This crate owns the authoritative [`GameState`](game_core::GameState) and
//! drives it through [`game_core::GameEngine`]. Consumers embed a
//! [`GameSession`] to issue actions, read state, and subscribe to events.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the controller and its builder
//! - [`events`] provides the topic-based event bus
//! - [`error`] holds the runtime error type
pub mod error;
pub mod events;
pub mod session;

pub use error::{Result, RuntimeError};
pub use events::{ActionEvent, Event, EventBus, EventReceiver, Topic, TurnEvent, drain};
pub use session::{GameSession, SessionBuilder};

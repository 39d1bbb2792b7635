//! Topic-based event bus implementation.
//!
//! The bus is a set of `tokio::sync::broadcast` channels used as plain
//! fan-out queues. Nothing here needs an async runtime: the session publishes
//! synchronously and subscribers drain with `try_recv`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use game_core::GameEvent;

use super::types::{ActionEvent, TurnEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Rule-level notifications (moves, hits, heals, defeat)
    Game,
    /// Accepted and rejected actions
    Action,
    /// Turn management events
    Turn,
}

/// Receiving end of one topic subscription.
pub type EventReceiver = broadcast::Receiver<Event>;

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Game(GameEvent),
    Action(ActionEvent),
    Turn(TurnEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Game(_) => Topic::Game,
            Event::Action(_) => Topic::Action,
            Event::Turn(_) => Topic::Turn,
        }
    }
}

struct Channels {
    game: broadcast::Sender<Event>,
    action: broadcast::Sender<Event>,
    turn: broadcast::Sender<Event>,
}

impl Channels {
    fn get(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Game => &self.game,
            Topic::Action => &self.action,
            Topic::Turn => &self.turn,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Clones share the same channels.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Channels {
                game: broadcast::channel(capacity).0,
                action: broadcast::channel(capacity).0,
                turn: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.get(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic
    /// published after this call.
    pub fn subscribe(&self, topic: Topic) -> EventReceiver {
        self.channels.get(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, EventReceiver)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Takes every event currently queued on `receiver` without blocking.
///
/// A receiver that fell behind skips the overwritten events and keeps going.
pub fn drain(receiver: &mut EventReceiver) -> Vec<Event> {
    let mut events = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event subscriber lagged; events dropped");
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    events
}

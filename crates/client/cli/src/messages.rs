//! Message log fed from runtime events.
use std::collections::VecDeque;

use game_core::{ErrorSeverity, GameEvent};
use runtime::{ActionEvent, Event, TurnEvent};

/// Severity level for UI messages produced from runtime events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    /// Converts a runtime event into a log line, if it is worth showing.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Game(game_event) => {
                let level = match game_event {
                    GameEvent::HeroDefeated { .. } => MessageLevel::Error,
                    GameEvent::HeroDamaged { .. } => MessageLevel::Warning,
                    _ => MessageLevel::Info,
                };
                Some(Self::new(game_event.to_string(), level))
            }
            Event::Action(
                rejected @ ActionEvent::Rejected {
                    severity, error, ..
                },
            ) => {
                let level = match severity {
                    ErrorSeverity::Recoverable | ErrorSeverity::Validation => MessageLevel::Warning,
                    ErrorSeverity::Internal | ErrorSeverity::Fatal => MessageLevel::Error,
                };
                let text = format!("{} refused: {error}", rejected.action().as_snake_case());
                Some(Self::new(text, level))
            }
            Event::Action(ActionEvent::Executed { .. }) => None,
            Event::Turn(TurnEvent { .. }) => None,
        }
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Info));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Action, Position};

    #[test]
    fn keeps_only_the_newest_entries() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push_text("three");

        let texts: Vec<&str> = log.recent(5).map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["three", "two"]);
    }

    #[test]
    fn classifies_events() {
        let defeat = MessageEntry::from_event(&Event::Game(GameEvent::HeroDefeated { turn: 4 }))
            .unwrap();
        assert_eq!(defeat.level, MessageLevel::Error);
        assert!(defeat.text.contains("turn 4"));

        let moved = MessageEntry::from_event(&Event::Game(GameEvent::HeroMoved {
            from: Position::new(0, 0),
            to: Position::new(1, 0),
            moves_left: 2,
        }))
        .unwrap();
        assert_eq!(moved.level, MessageLevel::Info);

        let executed = Event::Action(ActionEvent::Executed {
            action: Action::end_turn(),
            nonce: 1,
        });
        assert!(MessageEntry::from_event(&executed).is_none());
    }

    #[test]
    fn rejection_level_follows_severity() {
        let rejected = |severity| {
            Event::Action(ActionEvent::Rejected {
                action: Action::ranged_attack(),
                phase: None,
                severity,
                code: "CODE".to_string(),
                error: "no".to_string(),
            })
        };

        let busy = MessageEntry::from_event(&rejected(ErrorSeverity::Recoverable)).unwrap();
        assert_eq!(busy.level, MessageLevel::Warning);
        assert_eq!(busy.text, "ranged_attack refused: no");

        let over = MessageEntry::from_event(&rejected(ErrorSeverity::Fatal)).unwrap();
        assert_eq!(over.level, MessageLevel::Error);
    }
}

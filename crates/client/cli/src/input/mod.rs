//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Action;

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Submit the decoded game action to the session.
    Submit(Action),
    /// Enter or leave cursor mode.
    ToggleCursor,
    /// Move the destination cursor.
    MoveCursor { dx: i32, dy: i32 },
    /// Jump to the cursor with `move_to`.
    ConfirmCursor,
    /// Start a new game from the opening scenario.
    Restart,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game commands.
///
/// Directions: arrows or `h`/`j`/`k`/`l`. In normal mode `f` strikes
/// adjacent enemies, `r` fires a volley, `e` or Enter ends the turn and `c`
/// opens the cursor. In cursor mode directions move the cursor and Enter
/// confirms.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// Mode is provided externally (from AppState) for cleaner separation.
    pub fn handle_key(&self, key: KeyEvent, mode: AppMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match mode {
            AppMode::Normal => self.handle_normal_mode(key),
            AppMode::Cursor => self.handle_cursor_mode(key),
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent) -> KeyAction {
        if let Some((dx, dy)) = direction(key.code) {
            return KeyAction::Submit(Action::move_by(dx, dy));
        }

        match key.code {
            KeyCode::Char('f') => KeyAction::Submit(Action::melee_attack()),
            KeyCode::Char('r') => KeyAction::Submit(Action::ranged_attack()),
            KeyCode::Char('e') | KeyCode::Enter => KeyAction::Submit(Action::end_turn()),
            KeyCode::Char('c') => KeyAction::ToggleCursor,
            KeyCode::Char('n') => KeyAction::Restart,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_cursor_mode(&self, key: KeyEvent) -> KeyAction {
        if let Some((dx, dy)) = direction(key.code) {
            return KeyAction::MoveCursor { dx, dy };
        }

        match key.code {
            KeyCode::Enter => KeyAction::ConfirmCursor,
            KeyCode::Esc | KeyCode::Char('c') => KeyAction::ToggleCursor,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

/// Unit step for a direction key. `y` grows downward.
fn direction(code: KeyCode) -> Option<(i32, i32)> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some((-1, 0)),
        KeyCode::Right | KeyCode::Char('l') => Some((1, 0)),
        KeyCode::Up | KeyCode::Char('k') => Some((0, -1)),
        KeyCode::Down | KeyCode::Char('j') => Some((0, 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_movement_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('h')), AppMode::Normal),
            KeyAction::Submit(Action::move_by(-1, 0))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), AppMode::Normal),
            KeyAction::Submit(Action::move_by(0, 1))
        );
    }

    #[test]
    fn maps_attacks_and_end_turn() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('f')), AppMode::Normal),
            KeyAction::Submit(Action::melee_attack())
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r')), AppMode::Normal),
            KeyAction::Submit(Action::ranged_attack())
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), AppMode::Normal),
            KeyAction::Submit(Action::end_turn())
        );
    }

    #[test]
    fn cursor_mode_moves_cursor_instead_of_hero() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('l')), AppMode::Cursor),
            KeyAction::MoveCursor { dx: 1, dy: 0 }
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), AppMode::Cursor),
            KeyAction::ConfirmCursor
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), AppMode::Cursor),
            KeyAction::ToggleCursor
        );
    }

    #[test]
    fn maps_quit_and_ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), AppMode::Normal),
            KeyAction::Quit
        );
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c, AppMode::Cursor), KeyAction::Quit);
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), AppMode::Normal),
            KeyAction::None
        );
    }
}

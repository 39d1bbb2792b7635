//! Application state for mode management and UI context.

use game_core::Position;
use game_core::grid;

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Direct control: keys move and attack.
    Normal,
    /// A cursor picks a `move_to` destination.
    Cursor,
}

/// UI-only state; never part of the game state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub cursor: Position,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Normal,
            cursor: Position::ORIGIN,
        }
    }

    /// Enters cursor mode with the cursor on `origin`, or leaves it.
    pub fn toggle_cursor(&mut self, origin: Position) {
        self.mode = match self.mode {
            AppMode::Normal => {
                self.cursor = origin;
                AppMode::Cursor
            }
            AppMode::Cursor => AppMode::Normal,
        };
    }

    /// Moves the cursor, keeping it on the grid.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let next = self.cursor.offset(dx, dy);
        if grid::in_bounds(next) {
            self.cursor = next;
        }
    }

    pub fn exit_cursor(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn cursor_position(&self) -> Option<Position> {
        (self.mode == AppMode::Cursor).then_some(self.cursor)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_starts_on_hero_and_stays_on_grid() {
        let mut state = AppState::new();
        state.toggle_cursor(Position::new(0, 1));
        assert_eq!(state.cursor_position(), Some(Position::new(0, 1)));

        state.move_cursor(-1, 0);
        state.move_cursor(0, -1);
        state.move_cursor(0, -1);
        assert_eq!(state.cursor, Position::new(0, 0));

        state.toggle_cursor(Position::new(5, 5));
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.cursor_position(), None);
    }
}

//! UI rendering with Ratatui.
//!
//! Frame layout and panel composition. The game state is only read here.
use anyhow::Result;
use game_core::{GameConfig, GameState, Position, TurnPhase};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    messages::MessageLog,
    presentation::{terminal::Screen, widgets},
    state::{AppMode, AppState},
};

/// Everything one frame needs, borrowed from the app.
pub struct UiFrame<'a> {
    pub state: &'a GameState,
    pub config: &'a GameConfig,
    pub app_state: &'a AppState,
    pub reachable: &'a [Position],
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
}

pub fn render(screen: &mut Screen, view: &UiFrame<'_>) -> Result<()> {
    screen.draw(|frame| render_frame(frame, view))
}

fn render_frame(frame: &mut Frame, view: &UiFrame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(view.message_panel_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view.state);
    render_game(frame, chunks[1], view);
    widgets::messages::render(frame, chunks[2], view.messages);
    widgets::footer::render(
        frame,
        chunks[3],
        view.app_state.mode,
        view.state.is_over(),
    );
}

fn render_game(frame: &mut Frame, area: Rect, view: &UiFrame<'_>) {
    let map_width = widgets::map::CELL_WIDTH * game_core::grid::GRID_SIZE as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(map_width), Constraint::Min(20)])
        .split(area);

    // Range preview only while a jump can still be chosen.
    let reachable = match view.app_state.mode {
        AppMode::Cursor => view.reachable,
        AppMode::Normal => &[],
    };
    widgets::map::render(
        frame,
        chunks[0],
        view.state,
        reachable,
        view.app_state.cursor_position(),
    );
    widgets::stats::render(frame, chunks[1], view.state, view.config);
}

fn render_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let (status, color) = match state.turn.phase {
        TurnPhase::HeroPhase => ("Your move", Color::Green),
        TurnPhase::Defeated => ("GAME OVER - the hero has fallen", Color::Red),
    };

    let line = Line::from(vec![
        Span::styled(
            format!("Turn {}", state.turn.number),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(status, Style::default().fg(color)),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Grid Tactics")),
        area,
    );
}

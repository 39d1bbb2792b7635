//! Map widget rendering the grid with walls, healing spots and units.

use game_core::{GameState, Position, grid};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Width of one rendered cell in terminal columns.
pub const CELL_WIDTH: u16 = 3;

/// Render the battlefield.
///
/// Priority: hero > enemy > healing spot > wall > floor. Cells the hero
/// could jump to get a tinted background; the cursor gets a bright one.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    reachable: &[Position],
    cursor: Option<Position>,
) {
    let rows: Vec<Line> = (0..grid::GRID_SIZE)
        .map(|y| {
            let spans: Vec<Span> = (0..grid::GRID_SIZE)
                .map(|x| {
                    let position = Position::new(x, y);
                    let (glyph, mut style) = tile(state, position);

                    if cursor == Some(position) {
                        style = style.bg(Color::Yellow).add_modifier(Modifier::BOLD);
                    } else if reachable.contains(&position) {
                        // Move range: subtle blue tint
                        style = style.bg(Color::Rgb(20, 20, 50));
                    }

                    Span::styled(glyph, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = match cursor {
        Some(position) => format!("Battlefield - cursor {position}"),
        None => "Battlefield".to_string(),
    };
    let paragraph = Paragraph::new(rows).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn tile(state: &GameState, position: Position) -> (String, Style) {
    let hero = state.hero();
    if hero.position == position {
        let color = if hero.is_dead() { Color::DarkGray } else { Color::Cyan };
        return (
            " @ ".to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );
    }

    if let Some(enemy) = state.entities.enemy_at(position) {
        // Single-digit hp fits the cell.
        let glyph = if enemy.hp.current < 10 {
            format!("E{} ", enemy.hp.current)
        } else {
            "E+ ".to_string()
        };
        return (glyph, Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    }

    if state.entities.healing_spot_at(position).is_some() {
        return (" + ".to_string(), Style::default().fg(Color::Green));
    }

    if state.world.is_wall(position) {
        return ("###".to_string(), Style::default().fg(Color::Gray));
    }

    (" . ".to_string(), Style::default().fg(Color::DarkGray))
}

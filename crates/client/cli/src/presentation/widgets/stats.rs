//! Hero and battlefield summary panel.

use game_core::{GameConfig, GameState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, state: &GameState, config: &GameConfig) {
    let hero = state.hero();
    let hp_color = match hero.hp.current * 3 {
        value if value <= hero.hp.maximum => Color::Red,
        value if value <= hero.hp.maximum * 2 => Color::Yellow,
        _ => Color::Green,
    };
    let moves_color = if hero.has_moves() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let label = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("HP     ", label),
            Span::styled(hero.hp.to_string(), Style::default().fg(hp_color)),
        ]),
        Line::from(vec![
            Span::styled("Moves  ", label),
            Span::styled(
                format!("{}/{}", hero.moves, hero.max_moves),
                Style::default().fg(moves_color),
            ),
        ]),
        Line::from(vec![
            Span::styled("Melee  ", label),
            Span::raw(hero.melee_power.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Ranged ", label),
            Span::raw(format!("{} (range {})", hero.ranged_power, hero.ranged_range)),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Enemies ", label),
            Span::raw(state.enemies().len().to_string()),
        ]),
    ];

    for enemy in state.enemies() {
        lines.push(Line::styled(
            format!(" {} at {} hp {}", enemy.id, enemy.position, enemy.hp),
            Style::default().fg(Color::Red),
        ));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!("Sight: {:?}", config.sight),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Hero"));
    frame.render_widget(paragraph, area);
}

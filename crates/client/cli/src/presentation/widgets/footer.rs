//! Key help line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::state::AppMode;

pub fn render(frame: &mut Frame, area: Rect, mode: AppMode, game_over: bool) {
    let help = match (mode, game_over) {
        (_, true) => "n: new game | q: quit",
        (AppMode::Normal, false) => {
            "arrows/hjkl: move | f: melee | r: ranged | e/Enter: end turn | c: jump | n: new game | q: quit"
        }
        (AppMode::Cursor, false) => "arrows/hjkl: move cursor | Enter: jump here | Esc/c: cancel",
    };

    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

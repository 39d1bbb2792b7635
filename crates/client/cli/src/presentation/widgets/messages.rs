//! Messages widget displaying recent game events.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::messages::{MessageLevel, MessageLog};

/// Render the message log panel.
///
/// Displays recent messages in bottom-to-top order (newest at bottom).
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| ListItem::new(entry.text.clone()).style(style(entry.level)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

fn style(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::default(),
        MessageLevel::Warning => Style::default().fg(Color::Yellow),
        MessageLevel::Error => Style::default().fg(Color::Red),
    }
}

use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::ActivityEntry;
use crate::tui::theme;
use crate::utils::format::{format_relative, truncate};

pub fn render(frame: &mut Frame, area: Rect, entries: &[ActivityEntry], today: NaiveDate) {
    let block = Block::default()
        .title(Span::styled(" Recent Activity ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let mut lines = vec![Line::from("")];
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Nothing yet — solve something!",
            theme::dim(),
        )));
    }
    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", entry.action.verb()), theme::amber()),
            Span::styled(truncate(&entry.title, 26), theme::bold()),
            Span::styled(
                format!("  {}", format_relative(entry.timestamp, today)),
                theme::dim(),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

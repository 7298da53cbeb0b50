use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::TopicStats;
use crate::tui::theme;
use crate::utils::format::{progress_bar, truncate};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    stats: &[TopicStats],
    selected: usize,
    focused: bool,
) {
    let border = if focused {
        theme::accent()
    } else {
        ratatui::style::Style::default().fg(theme::BORDER)
    };
    let block = Block::default()
        .title(Span::styled(" Topics ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(theme::surface());

    let inner_height = area.height.saturating_sub(2) as usize;
    // Keep the selected row visible.
    let offset = selected.saturating_sub(inner_height.saturating_sub(1));

    let mut lines = Vec::new();
    for (i, s) in stats.iter().enumerate().skip(offset).take(inner_height) {
        let marker = if i == selected && focused { "▸ " } else { "  " };
        let name_style = if i == selected {
            theme::bold().add_modifier(Modifier::BOLD)
        } else {
            theme::dim()
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), theme::accent()),
            Span::styled(format!("{:<18}", truncate(&s.topic, 16)), name_style),
            Span::styled(progress_bar(s.completed, s.total, 10), theme::green()),
            Span::styled(format!(" {:>3}%", s.progress), theme::dim()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Problem;
use crate::tui::theme;
use crate::utils::format::truncate;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    topic: &str,
    problems: &[&Problem],
    selected: usize,
    focused: bool,
) {
    let border = if focused {
        theme::accent()
    } else {
        ratatui::style::Style::default().fg(theme::BORDER)
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", topic), theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(theme::surface());

    let inner_height = area.height.saturating_sub(2) as usize;
    let offset = selected.saturating_sub(inner_height.saturating_sub(1));
    let width = area.width.saturating_sub(22).max(20) as usize;

    let mut lines = Vec::new();
    for (i, p) in problems.iter().enumerate().skip(offset).take(inner_height) {
        let marker = if i == selected && focused { "▸" } else { " " };
        let check = if p.completed {
            Span::styled("✓ ", theme::green())
        } else {
            Span::styled("○ ", theme::dim())
        };
        let star = if p.favorite {
            Span::styled("★ ", theme::amber())
        } else {
            Span::styled("  ", theme::dim())
        };
        let title_style = if i == selected {
            theme::bold().add_modifier(Modifier::BOLD)
        } else if p.completed {
            theme::dim()
        } else {
            ratatui::style::Style::default().fg(theme::TEXT)
        };
        let revs = if p.revision_count > 0 {
            format!(" r{}", p.revision_count)
        } else {
            String::new()
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), theme::accent()),
            check,
            star,
            Span::styled(
                format!("{:<w$}", truncate(&p.title, width), w = width),
                title_style,
            ),
            Span::styled(format!("{:<7}", p.difficulty), theme::difficulty(p.difficulty)),
            Span::styled(revs, theme::dim()),
        ]));
    }

    if problems.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No problems in this topic",
            theme::dim(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

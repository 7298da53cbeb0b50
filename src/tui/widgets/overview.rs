use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{CompletionEstimate, DifficultyStats};
use crate::tui::theme;
use crate::utils::format::progress_bar;

/// Overall numbers: completion bar, difficulty split, pace estimate.
pub struct OverviewData {
    pub total: u32,
    pub completed: u32,
    pub overall: u32,
    pub split: DifficultyStats,
    pub estimate: CompletionEstimate,
    pub daily_target: u32,
}

pub fn render(frame: &mut Frame, area: Rect, data: &OverviewData) {
    let block = Block::default()
        .title(Span::styled(" Progress ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let bar_line = Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(progress_bar(data.completed, data.total, 16), theme::green()),
        Span::styled(
            format!("  {}%", data.overall),
            theme::bold().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({}/{})", data.completed, data.total),
            theme::dim(),
        ),
    ]);

    let split_line = Line::from(vec![
        Span::styled("  Easy ", theme::dim()),
        Span::styled(
            format!("{}/{}", data.split.easy.completed, data.split.easy.total),
            theme::green(),
        ),
        Span::styled("   Medium ", theme::dim()),
        Span::styled(
            format!("{}/{}", data.split.medium.completed, data.split.medium.total),
            theme::amber(),
        ),
        Span::styled("   Hard ", theme::dim()),
        Span::styled(
            format!("{}/{}", data.split.hard.completed, data.split.hard.total),
            theme::red(),
        ),
    ]);

    let pace_line = Line::from(Span::styled(
        format!(
            "  {} left · ~{} days at {}/day",
            data.estimate.remaining,
            data.estimate.days_needed,
            data.daily_target.max(1)
        ),
        theme::dim(),
    ));

    let text = vec![Line::from(""), bar_line, Line::from(""), split_line, pace_line];
    frame.render_widget(Paragraph::new(text).block(block), area);
}

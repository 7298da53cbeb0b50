use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::models::{DailyActivity, StreakStatus, StreakSummary};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    summary: &StreakSummary,
    status: &StreakStatus,
    weekly: &[DailyActivity],
) {
    let block = Block::default()
        .title(Span::styled(" Streak ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // big digits
            Constraint::Length(1), // label + message
            Constraint::Length(1), // weekly dots
        ])
        .split(inner);

    // A lapsed streak still reads 1, so dim it instead of lighting it up.
    let digit_style = if status.active {
        theme::green().add_modifier(Modifier::BOLD)
    } else {
        theme::dim()
    };
    let digits = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(digit_style)
        .lines(vec![format!(" {}", summary.streak).into()])
        .build();
    frame.render_widget(digits, chunks[0]);

    let label = Line::from(vec![
        Span::styled(
            format!("  day{} · ", if summary.streak == 1 { "" } else { "s" }),
            theme::dim(),
        ),
        Span::styled(status.message(), theme::amber()),
    ]);
    frame.render_widget(Paragraph::new(label), chunks[1]);

    // One dot per day, oldest first.
    let mut dots = vec![Span::styled("  ", theme::dim())];
    for cell in weekly {
        let (dot, style) = match cell.solved {
            n if n >= 3 => ("●", theme::green().add_modifier(Modifier::BOLD)),
            2 => ("●", theme::amber()),
            1 => ("◑", theme::amber()),
            _ => ("○", theme::dim()),
        };
        dots.push(Span::styled(dot, style));
        dots.push(Span::styled("  ", theme::dim()));
    }
    frame.render_widget(Paragraph::new(Line::from(dots)), chunks[2]);
}

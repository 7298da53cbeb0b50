use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, problems_view: bool) {
    let hints: &[(&str, &str)] = if problems_view {
        &[
            ("[m]", " done  "),
            ("[f]", " favorite  "),
            ("[v]", " revise  "),
            ("[Tab]", " switch pane  "),
            ("[↑ ↓]", " navigate  "),
            ("[Esc]", " back"),
        ]
    } else {
        &[
            ("[p]", " problems  "),
            ("[↑ ↓]", " topics  "),
            ("[?]", " help  "),
            ("[Esc]", " quit"),
        ]
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(*key, theme::accent()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

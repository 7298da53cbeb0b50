use ratatui::style::{Color, Modifier, Style};

use crate::models::Difficulty;

pub const BG: Color = Color::Rgb(16, 18, 24);
pub const SURFACE: Color = Color::Rgb(24, 27, 34);
pub const BORDER: Color = Color::Rgb(48, 54, 66);
pub const BORDER_FOCUS: Color = Color::Rgb(97, 175, 239);
pub const TEXT: Color = Color::Rgb(212, 218, 228);
pub const TEXT_DIM: Color = Color::Rgb(110, 120, 140);
pub const ACCENT: Color = Color::Rgb(97, 175, 239);
pub const GREEN: Color = Color::Rgb(112, 168, 112);
pub const AMBER: Color = Color::Rgb(216, 160, 76);
pub const RED: Color = Color::Rgb(200, 96, 80);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn difficulty(d: Difficulty) -> Style {
    match d {
        Difficulty::Easy => green(),
        Difficulty::Medium => amber(),
        Difficulty::Hard => red(),
    }
}

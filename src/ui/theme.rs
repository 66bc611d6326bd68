use ratatui::style::{Color, Modifier, Style};

use crate::models::Verdict;

pub const STYLE_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const STYLE_SUBTITLE: Style = Style::new().fg(Color::Gray);
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);
pub const STYLE_WARNING: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
pub const STYLE_ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
pub const STYLE_HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
pub const STYLE_SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);
pub const STYLE_DETAIL: Style = Style::new().fg(Color::Gray);
pub const STYLE_STAT_NUMBER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
pub const STYLE_BORDER: Style = Style::new().fg(Color::DarkGray);

/// Badge colour; unrecognized labels stay unstyled.
pub fn badge_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::True) => Style::new().fg(Color::Green),
        Some(Verdict::Uncertain) => Style::new().fg(Color::Yellow),
        Some(Verdict::False) => Style::new().fg(Color::Red),
        None => Style::new(),
    }
}

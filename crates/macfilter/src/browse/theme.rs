//! Colors for the browser, one function per on-screen role.

use ratatui::style::{Color, Modifier, Style};

use super::app::StatusKind;

const PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
const CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
const YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
const GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
const RED: Color = Color::Rgb(255, 99, 99); // #ff6363
const TEXT: Color = Color::Rgb(189, 193, 207); // #bdc1cf
const MUTED: Color = Color::Rgb(98, 114, 164); // #6272a4
const SELECTION_BG: Color = Color::Rgb(40, 42, 54); // #282a36

pub fn panel_title() -> Style {
    Style::new().fg(CYAN).add_modifier(Modifier::BOLD)
}

/// The focused panel gets the accent border.
pub fn panel_border(focused: bool) -> Style {
    Style::new().fg(if focused { PURPLE } else { MUTED })
}

pub fn column_header() -> Style {
    Style::new()
        .fg(CYAN)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn row() -> Style {
    Style::new().fg(TEXT)
}

/// Filter entries with no known client behind them.
pub fn row_unknown() -> Style {
    Style::new().fg(MUTED).add_modifier(Modifier::ITALIC)
}

pub fn row_selected() -> Style {
    Style::new()
        .fg(PURPLE)
        .bg(SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn status(kind: StatusKind) -> Style {
    match kind {
        StatusKind::Info => Style::new().fg(TEXT),
        StatusKind::Busy => Style::new().fg(YELLOW),
        StatusKind::Success => Style::new().fg(GREEN),
        StatusKind::Error => Style::new().fg(RED).add_modifier(Modifier::BOLD),
    }
}

/// Separators, secondary text and hint labels.
pub fn muted() -> Style {
    Style::new().fg(MUTED)
}

pub fn hint_key() -> Style {
    Style::new().fg(CYAN).add_modifier(Modifier::BOLD)
}

//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered, centered action button
///
/// `accent` colors the label when the button isn't focused, so a button can
/// signal state (e.g. red while the form has errors).
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    accent: Option<Color>,
) {
    let (border_style, text_style) = if is_selected {
        let style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        (Style::default().fg(Color::Cyan), style)
    } else {
        let fg = accent.unwrap_or(Color::White);
        (Style::default().fg(Color::DarkGray), Style::default().fg(fg))
    };

    let marker = if is_selected { "▶ " } else { "" };
    let paragraph = Paragraph::new(format!("{marker}{label}"))
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

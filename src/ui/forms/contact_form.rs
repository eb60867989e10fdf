//! Contact form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the contact form with inline errors
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Contact Us ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // First / last name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Query type
            Constraint::Min(6),                // Message
            Constraint::Length(3),             // Consent
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    let name_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let areas = [
        (FieldName::FirstName, name_row[0]),
        (FieldName::LastName, name_row[1]),
        (FieldName::Email, chunks[1]),
        (FieldName::QueryType, chunks[2]),
        (FieldName::Message, chunks[3]),
        (FieldName::Consent, chunks[4]),
    ];

    let form = &app.form;
    for (field, field_area) in areas {
        draw_field(
            frame,
            field_area,
            field,
            &form.state,
            form.errors.get(field),
            form.active_field_index == field.index(),
        );
    }

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[5])[0];
    let accent = if form.errors.is_empty() {
        Color::Green
    } else {
        Color::Red
    };
    render_action_button(
        frame,
        button_area,
        "Submit",
        form.is_submit_active(),
        Some(accent),
    );

    draw_help_text(frame, chunks[6]);
}

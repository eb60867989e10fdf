//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldName, FormState, QueryType};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn border_style(is_active: bool, has_error: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Bordered block for a field, with its error message along the bottom edge
fn field_block(field: FieldName, error: Option<&str>, is_active: bool) -> Block<'static> {
    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

const CURSOR: &str = "▌";

/// Draw any contact form field with its inline error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    state: &FormState,
    error: Option<&str>,
    is_active: bool,
) {
    let block = field_block(field, error, is_active);
    let widget = match field.kind() {
        FieldKind::Text => text_content(state.text(field).unwrap_or_default(), is_active)
            .wrap(Wrap { trim: false })
            .block(block),
        FieldKind::MultilineText => {
            let value = state.text(field).unwrap_or_default();
            let counter = format!(
                " {}/{} ",
                value.chars().count(),
                crate::validation::MESSAGE_MAX_LEN
            );
            let block = block.title_top(
                Line::from(Span::styled(counter, Style::default().fg(Color::DarkGray)))
                    .right_aligned(),
            );
            let inner_width = area.width.saturating_sub(2) as usize;
            let inner_height = area.height.saturating_sub(2) as usize;
            let (content, rows) = multiline_content(value, is_active, inner_width);
            // The cursor sits on the last row; keep it in view while editing
            let offset = if is_active {
                rows.saturating_sub(inner_height)
            } else {
                0
            };
            content
                .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
                .block(block)
        }
        FieldKind::Radio => radio_content(state.query_type, is_active)
            .wrap(Wrap { trim: false })
            .block(block),
        FieldKind::Checkbox => checkbox_content(state.consent, is_active)
            .wrap(Wrap { trim: false })
            .block(block),
    };
    frame.render_widget(widget, area);
}

fn text_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn text_content(value: &str, is_active: bool) -> Paragraph<'static> {
    let display_str = if value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        value.to_string()
    };
    let cursor = if is_active { CURSOR } else { "" };

    Paragraph::new(Line::from(vec![
        Span::styled(display_str, text_style(is_active)),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
}

/// Split text into rows of at most `width` chars, breaking at newlines first
fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// Pre-wrapped message rows, so the scroll offset counts real screen rows
fn multiline_content(value: &str, is_active: bool, width: usize) -> (Paragraph<'static>, usize) {
    if value.is_empty() && !is_active {
        return (
            Paragraph::new(Line::from(Span::styled("(empty)", text_style(false)))),
            1,
        );
    }

    let text = if is_active {
        format!("{value}{CURSOR}")
    } else {
        value.to_string()
    };
    let rows = hard_wrap(&text, width);
    let count = rows.len();
    let last = count.saturating_sub(1);

    let lines: Vec<Line> = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            if is_active && i == last {
                let body = row.strip_suffix(CURSOR).unwrap_or(&row).to_string();
                Line::from(vec![
                    Span::styled(body, text_style(true)),
                    Span::styled(CURSOR, Style::default().fg(Color::Cyan)),
                ])
            } else {
                Line::from(Span::styled(row, text_style(is_active)))
            }
        })
        .collect();
    (Paragraph::new(lines), count)
}

fn radio_content(selected: Option<QueryType>, is_active: bool) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for option in QueryType::ALL {
        let is_selected = selected == Some(option);
        let marker = if is_selected { "(•)" } else { "( )" };
        let style = if is_selected {
            Style::default()
                .fg(if is_active { Color::Cyan } else { Color::White })
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{marker} {option}"), style));
        spans.push(Span::raw("   "));
    }
    Paragraph::new(Line::from(spans))
}

fn checkbox_content(checked: bool, is_active: bool) -> Paragraph<'static> {
    let marker = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Paragraph::new(Line::from(vec![
        Span::styled(marker, style),
        Span::raw(" I hereby consent to being contacted by the team"),
    ]))
}

/// Draw the key help line for the form
pub fn draw_help_text(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::raw(": select  "),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

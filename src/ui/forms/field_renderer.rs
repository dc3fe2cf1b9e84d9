//! Field rendering utilities for forms

use crate::state::ValidatedField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of the bordered input box
const INPUT_HEIGHT: u16 = 3;

/// Errors rendered under a field; hidden until the user has edited it
pub fn visible_errors(field: &ValidatedField) -> &[String] {
    if field.is_touched() {
        field.errors()
    } else {
        &[]
    }
}

/// Rows a field needs: the input box plus one line per visible error
pub fn field_height(field: &ValidatedField) -> u16 {
    INPUT_HEIGHT + visible_errors(field).len() as u16
}

/// Draw an input box with its inline errors underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &ValidatedField, is_active: bool) {
    let errors = visible_errors(field);
    let has_errors = !errors.is_empty();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(errors.len() as u16),
        ])
        .split(area);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_errors {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let value = field.display_value();

    let line = if value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(
                field.placeholder.as_str(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw(value),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), chunks[0]);

    if has_errors {
        let lines: Vec<Line> = errors
            .iter()
            .map(|e| Line::from(Span::styled(format!(" {e}"), Style::default().fg(Color::Red))))
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }
}

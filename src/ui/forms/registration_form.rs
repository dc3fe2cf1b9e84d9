//! Registration form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::{FieldKind, FormStatus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::{centered_rect, CARD_WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows used by the status banner (message + spacing)
const BANNER_HEIGHT: u16 = 2;

/// Draw the registration card centered in `area`
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let fields_height: u16 = FieldKind::ALL
        .into_iter()
        .map(|kind| field_height(form.field(kind)))
        .sum();
    // borders (2) + margin (2) + banner + fields + spacer (1) + button
    let card_height = 4 + BANNER_HEIGHT + fields_height + 1 + BUTTON_HEIGHT;
    let card = centered_rect(area, CARD_WIDTH, card_height);

    let block = Block::default()
        .title(" Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut constraints = vec![Constraint::Length(BANNER_HEIGHT)];
    constraints.extend(
        FieldKind::ALL
            .into_iter()
            .map(|kind| Constraint::Length(field_height(form.field(kind)))),
    );
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    draw_status_banner(frame, chunks[0], &app.state.status);

    for kind in FieldKind::ALL {
        let is_active = form.active_field_index == kind.index();
        draw_field(frame, chunks[kind.index() + 1], form.field(kind), is_active);
    }

    let button_row = FieldKind::ALL.len() + 2;
    render_button(
        frame,
        chunks[button_row],
        "Register",
        form.is_submit_row_active(),
        app.can_submit(),
    );
}

/// Green banner on success, red on failure, nothing before the first attempt
fn draw_status_banner(frame: &mut Frame, area: Rect, status: &FormStatus) {
    if status.is_empty() {
        return;
    }

    let color = if status.failed { Color::Red } else { Color::Green };
    let banner = Paragraph::new(status.message.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, area);
}

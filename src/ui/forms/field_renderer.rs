//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldName, RegistrationForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Character used to mask hidden passwords
const MASK_CHAR: char = '•';

/// Text shown inside a field box for the current value
pub fn display_value(form: &RegistrationForm, name: FieldName) -> String {
    let data = form.data();
    match name.kind() {
        FieldKind::Text => data.text(name).to_string(),
        FieldKind::Secret if data.show_password => data.text(name).to_string(),
        FieldKind::Secret => std::iter::repeat(MASK_CHAR)
            .take(data.text(name).chars().count())
            .collect(),
        FieldKind::Checkbox => {
            let mark = if data.show_password { "[x]" } else { "[ ]" };
            format!("{mark} {}", name.label())
        }
        FieldKind::Select => {
            let value = data.text(name);
            let shown = if value.is_empty() {
                name.placeholder().unwrap_or_default()
            } else {
                value
            };
            format!("< {shown} >")
        }
    }
}

/// Draw a single-line field box with an optional inline error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = match (is_active, error.is_some()) {
        (true, _) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default().fg(Color::Red),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    if !label.is_empty() {
        block = block.title(format!(" {label} "));
    }

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        )));
    }

    frame.render_widget(content.block(block), area);
}

/// Draw a registration field, deriving label, value, and error from the form
pub fn draw_form_field(frame: &mut Frame, area: Rect, form: &RegistrationForm, name: FieldName) {
    let is_active = form.active_name() == Some(name);
    // The checkbox carries its own label inside the box
    let label = match name.kind() {
        FieldKind::Checkbox => "",
        _ => name.label(),
    };
    draw_field(
        frame,
        area,
        label,
        &display_value(form, name),
        is_active,
        form.error(name),
    );
}

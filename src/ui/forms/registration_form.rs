//! Registration form rendering

use super::field_renderer::draw_form_field;
use crate::app::App;
use crate::state::{FieldName, FormPhase, RegistrationForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of one single-line field box
const FIELD_HEIGHT: u16 = 3;

/// Fields in the left column; the rest go on the right above the submit button
const LEFT_COLUMN: usize = 6;

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    draw_form(frame, area, &app.state.form);
}

/// Draw the form fields in two columns
pub fn draw_form(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let block = Block::default()
        .title(" Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let (left, right) = FieldName::ALL.split_at(LEFT_COLUMN);

    let left_rows = column_layout(columns[0], left.len(), false);
    for (name, row) in left.iter().zip(left_rows.iter()) {
        draw_form_field(frame, *row, form, *name);
    }

    let right_rows = column_layout(columns[1], right.len(), true);
    for (name, row) in right.iter().zip(right_rows.iter()) {
        draw_form_field(frame, *row, form, *name);
    }

    // Submit button sits below the last right-hand field
    if let Some(button_area) = right_rows.get(right.len()) {
        render_button(
            frame,
            *button_area,
            "Submit",
            form.is_submit_row_active(),
            form.can_submit() && form.phase() == FormPhase::Editing,
        );
    }
}

/// Stack `count` field rows, plus a button row when requested
fn column_layout(area: Rect, count: usize, with_button: bool) -> std::rc::Rc<[Rect]> {
    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); count];
    if with_button {
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
    }
    constraints.push(Constraint::Min(0)); // remaining space

    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
}

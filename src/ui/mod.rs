//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod result_view;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    // Draw main content based on current view
    match app.state.current_view {
        View::Register => forms::draw_registration(frame, main_area, app),
        View::Success => result_view::draw(frame, main_area, app.submission()),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything else
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

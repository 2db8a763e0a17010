//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Step;
use components::{render_error_dialog, render_submitting_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, header_area, main_area) = layout::create_layout(area);

    layout::draw_sidebar(frame, sidebar_area, app);
    layout::draw_header(frame, header_area, app);

    match app.state.wizard.step() {
        Step::Review => forms::review::draw(frame, main_area, app),
        _ => forms::step_form::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Overlays
    if app.state.wizard.is_submitting() {
        render_submitting_dialog(frame);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}

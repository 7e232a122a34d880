//! UI module for rendering the TUI

mod components;
mod forms;
mod help;
mod layout;

use crate::app::App;
use crate::state::View;
use components::{render_error_dialog, render_outcome_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, body_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Form => forms::draw_onboarding_form(frame, body_area, app),
        View::Help => help::draw(frame, body_area),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays, errors on top
    render_outcome_dialog(frame, &app.session.status);
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}

//! Onboarding step rendering

use super::field_renderer::{draw_plan_checklist, draw_text_field, field_height};
use crate::app::App;
use crate::state::{FieldKind, FormButton, Step};
use crate::ui::components::{render_button, BUTTON_HEIGHT, BUTTON_WIDTH};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the fields of the current step and the action row below them
pub fn draw_onboarding_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.session.form;
    let step = form.step();

    let block = Block::default()
        .title(format!(
            " Step {} of {}: {} ",
            step.index() + 1,
            Step::COUNT,
            step.title()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = form.current_fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|spec| Constraint::Length(field_height(spec)))
        .collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (idx, spec) in fields.iter().enumerate() {
        let is_active = form.active_field_index == idx;
        if spec.kind == FieldKind::MultiSelect {
            draw_plan_checklist(frame, chunks[idx], spec, form, is_active);
        } else {
            draw_text_field(
                frame,
                chunks[idx],
                spec,
                form.draft.text(spec.name),
                form.error_for(spec.name),
                is_active,
            );
        }
    }

    if let Some(action_area) = chunks.last() {
        draw_action_row(frame, *action_area, app);
    }
}

fn draw_action_row(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.session.form;
    let buttons = form.buttons();
    let on_row = form.is_action_row_active();
    let submitting = app.session.is_submitting();

    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(buttons.iter().map(|_| Constraint::Length(BUTTON_WIDTH)));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, button) in buttons.iter().enumerate() {
        let (label, accent) = match button {
            FormButton::Back => (button.label(), Color::Gray),
            FormButton::Next => (button.label(), Color::Blue),
            FormButton::Submit if submitting => ("Submitting...", Color::Yellow),
            FormButton::Submit => (button.label(), Color::Green),
        };
        let enabled = button.is_enabled(submitting);
        render_button(
            frame,
            chunks[idx + 1],
            label,
            on_row && form.selected_button == idx,
            enabled,
            accent,
        );
    }
}

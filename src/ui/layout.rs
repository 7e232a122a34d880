//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{BACK_SHORTCUT, NEXT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Step, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub const TITLE: &str = "Client Onboarding — RABT Marketing";

/// Header rows: border, title, step names, gauge, border
const HEADER_HEIGHT: u16 = 5;

/// Split the screen into header, body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Progress through the form as a percentage
pub fn progress_percent(step_index: usize) -> u16 {
    ((step_index + 1) * 100 / Step::COUNT) as u16
}

/// Draw the title, step names and progress gauge
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.session.form;
    let current = form.step();
    let flagged = form.steps_with_errors();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );

    let mut steps = Vec::with_capacity(Step::COUNT * 2);
    for step in Step::ALL {
        let style = if flagged.contains(&step) {
            Style::default().fg(Color::Red)
        } else if step == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if step < current {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        steps.push(Span::styled(
            format!("{}. {}", step.index() + 1, step.title()),
            style,
        ));
        steps.push(Span::raw("   "));
    }
    frame.render_widget(Paragraph::new(Line::from(steps)), rows[1]);

    let percent = progress_percent(form.sequencer().current_index());
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .percent(percent)
            .label(format!("{percent}%")),
        rows[2],
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let (dot, color) = if app.session.is_submitting() {
        (" ◐ ", Color::Yellow)
    } else {
        (" ● ", Color::Green)
    };
    spans.push(Span::styled(dot, Style::default().fg(color)));

    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    } else if app.session.form.has_errors() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Some fields need attention",
            Style::default().fg(Color::Red),
        ));
    } else if let Some(at) = app.session.last_submitted_at {
        spans.push(Span::raw(" | "));
        spans.push(Span::raw(format!(
            "Last submission {}",
            at.with_timezone(&chrono::Local).format("%H:%M:%S")
        )));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    let form = &app.session.form;
    match app.state.current_view {
        View::Help => "Esc:close help".to_string(),
        View::Form if form.is_plan_list_active() => {
            "↑/↓:move  Space:toggle  Tab:next  F1:help".to_string()
        }
        View::Form if form.step().is_terminal() => {
            format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {BACK_SHORTCUT}:back  Esc:quit  F1:help")
        }
        View::Form if form.step().is_first() => {
            format!("Tab:next  {NEXT_SHORTCUT}:next step  Esc:quit  F1:help")
        }
        View::Form => {
            format!("Tab:next  {NEXT_SHORTCUT}:next step  {BACK_SHORTCUT}:back  Esc:quit  F1:help")
        }
    }
}

//! Field rendering utilities for forms

use crate::catalog::MarketingPlan;
use crate::state::{FieldSpec, OnboardingForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs, borders and inline error line included
pub fn field_height(spec: &FieldSpec) -> u16 {
    if spec.kind.is_multiline() {
        7
    } else if spec.kind.accepts_typing() {
        4
    } else {
        MarketingPlan::ALL.len() as u16 + 3
    }
}

/// Draw a text field with its inline validation message below it
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let accent = if is_active { Color::Cyan } else { Color::DarkGray };
    let border_color = if error.is_some() { Color::Red } else { accent };

    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(vec![
            Span::styled(spec.placeholder, Style::default().fg(Color::DarkGray)),
            cursor,
        ])]
    } else {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::raw(l.to_string())))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        lines
    };

    // Keep the cursor line visible in the multiline box
    let inner_height = area.height.saturating_sub(3) as usize;
    if lines.len() > inner_height && inner_height > 0 {
        lines.drain(..lines.len() - inner_height);
    }

    let block = Block::default()
        .title(format!(" {} ", spec.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let box_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        box_area,
    );

    draw_error_line(frame, area, error);
}

/// Draw the marketing plan checklist
pub fn draw_plan_checklist(
    frame: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    form: &OnboardingForm,
    is_active: bool,
) {
    let error = form.error_for(spec.name);
    let border_color = match (error.is_some(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };

    let items: Vec<ListItem> = MarketingPlan::ALL
        .iter()
        .enumerate()
        .map(|(idx, plan)| {
            let checked = form.draft.is_selected(spec.name, plan.id());
            let under_cursor = is_active && idx == form.plan_cursor;
            let mark = if checked { "[x]" } else { "[ ]" };
            let label_style = if under_cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {mark} "), label_style),
                Span::styled(plan.label(), label_style),
                Span::styled(
                    format!("  {}", plan.price()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", spec.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let list_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    frame.render_widget(List::new(items).block(block), list_area);

    draw_error_line(frame, area, error);
}

fn draw_error_line(frame: &mut Frame, area: Rect, error: Option<&str>) {
    let Some(message) = error else {
        return;
    };
    if area.height == 0 {
        return;
    }
    let line_area = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(format!(" {message}")).style(Style::default().fg(Color::Red)),
        line_area,
    );
}

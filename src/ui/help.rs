//! Key binding overview

use crate::platform::{BACK_SHORTCUT, NEXT_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect) {
    let bindings = [
        ("Tab / Shift+Tab", "Move between fields and the buttons"),
        ("Enter", "New line in goals, press the selected button"),
        ("←/→", "Choose a button"),
        ("↑/↓  Space", "Move through and toggle marketing plans"),
        (NEXT_SHORTCUT, "Next step"),
        (BACK_SHORTCUT, "Previous step"),
        (SUBMIT_SHORTCUT, "Submit from the Contact step"),
        ("Esc", "Close a dialog, or quit"),
    ];

    let lines: Vec<Line> = bindings
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:<18}"), Style::default().fg(Color::Cyan)),
                Span::raw(*action),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

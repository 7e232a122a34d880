//! Dialog for a finished submission

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::presenter::StatusSignal;
use ratatui::{style::Color, text::Span, Frame};

/// Render the success or failure dialog; nothing for other signals
pub fn render_outcome_dialog(frame: &mut Frame, signal: &StatusSignal) {
    let (title, message, accent, hint) = match signal {
        StatusSignal::Success { title, description } => (
            title,
            description,
            Color::Green,
            vec![Span::raw("Press "), key_hint("Enter"), Span::raw(" to start over")],
        ),
        StatusSignal::Error {
            title,
            description,
            retryable: true,
        } => (
            title,
            description,
            Color::Red,
            vec![
                key_hint("Enter"),
                Span::raw(" retry  "),
                key_hint("Esc"),
                Span::raw(" back to form"),
            ],
        ),
        StatusSignal::Error {
            title, description, ..
        } => (
            title,
            description,
            Color::Yellow,
            vec![Span::raw("Press "), key_hint("Enter"), Span::raw(" to edit")],
        ),
        StatusSignal::Idle | StatusSignal::Pending => return,
    };

    render_dialog(
        frame,
        DialogConfig {
            title,
            accent,
            message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}

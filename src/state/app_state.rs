//! Application state definitions

use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    /// Key binding overview
    Help,
}

/// Terminal-level state around the onboarding session
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Transient hint shown in the status bar, cleared on the next key press
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.error_queue.push_back(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Drop the shown error, revealing the next one
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn toggle_help(&mut self) {
        self.current_view = match self.current_view {
            View::Form => View::Help,
            View::Help => View::Form,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_are_shown_in_order() {
        let mut state = AppState::default();
        state.push_error("first");
        state.push_error("second");

        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_toggle_help() {
        let mut state = AppState::default();
        state.toggle_help();
        assert_eq!(state.current_view, View::Help);
        state.toggle_help();
        assert_eq!(state.current_view, View::Form);
    }
}

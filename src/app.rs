//! Application state and key handling

use crate::platform::SHORTCUT_MODIFIER;
use crate::presenter::StatusSignal;
use crate::session::OnboardingSession;
use crate::state::{AppState, Form, FormButton, View};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

/// Main application struct
pub struct App {
    /// Terminal-level state
    pub state: AppState,
    /// The onboarding session being filled in
    pub session: OnboardingSession,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(session: OnboardingSession) -> Self {
        Self {
            state: AppState::default(),
            session,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message);
    }

    /// Collect a finished background submission
    pub async fn tick(&mut self) {
        self.session.poll_submit().await;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // Outcome dialog (modal)
        if self.session.status.is_dialog() {
            self.handle_outcome_dialog_key(key);
            return;
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if self.state.current_view == View::Help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter) {
                self.state.toggle_help();
            }
            return;
        }

        // The form is frozen until the running submission reports back
        if self.session.is_submitting() {
            match key.code {
                KeyCode::Esc => self.request_quit(),
                KeyCode::F(1) => self.state.toggle_help(),
                _ => debug!(session_id = %self.session.id, "key ignored while submitting"),
            }
            return;
        }

        if key.modifiers.contains(SHORTCUT_MODIFIER) {
            match key.code {
                KeyCode::Char('n') => self.advance(),
                KeyCode::Char('b') => self.retreat(),
                KeyCode::Char('s') => self.submit(),
                _ => {}
            }
            return;
        }

        self.handle_form_key(key);
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.session.form;
        let on_action_row = form.is_action_row_active();
        let on_plan_list = form.is_plan_list_active();

        match key.code {
            KeyCode::Esc => self.request_quit(),
            KeyCode::F(1) => self.state.toggle_help(),
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Up if on_plan_list => form.plan_cursor_up(),
            KeyCode::Down if on_plan_list => form.plan_cursor_down(),
            KeyCode::Char(' ') if on_plan_list => form.toggle_plan_at_cursor(),
            KeyCode::Left if on_action_row => form.prev_button(),
            KeyCode::Right if on_action_row => form.next_button(),
            KeyCode::Enter if on_action_row => {
                if let Some(button) = form.selected_button() {
                    self.activate(button);
                }
            }
            KeyCode::Enter => {
                if !form.newline() {
                    form.next_field();
                }
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.input_char(c),
            _ => {}
        }
    }

    fn handle_outcome_dialog_key(&mut self, key: KeyEvent) {
        let retryable = matches!(
            self.session.status,
            StatusSignal::Error {
                retryable: true,
                ..
            }
        );
        match key.code {
            KeyCode::Enter if retryable => {
                self.session.dismiss_status();
                self.submit();
            }
            KeyCode::Enter | KeyCode::Esc => self.session.dismiss_status(),
            _ => {}
        }
    }

    fn activate(&mut self, button: FormButton) {
        if !button.is_enabled(self.session.is_submitting()) {
            return;
        }
        match button {
            FormButton::Back => self.retreat(),
            FormButton::Next => self.advance(),
            FormButton::Submit => self.submit(),
        }
    }

    fn advance(&mut self) {
        if self.session.form.step().is_terminal() {
            return;
        }
        if self.session.advance().is_err() {
            self.state.status_message = Some("Please fix the highlighted fields".to_string());
        }
    }

    fn retreat(&mut self) {
        self.session.retreat();
    }

    fn submit(&mut self) {
        if !self.session.form.step().is_terminal() {
            self.state.status_message = Some("Submit is available on the Contact step".to_string());
            return;
        }
        if self.session.is_submitting() {
            debug!(session_id = %self.session.id, "submit key ignored while submitting");
            return;
        }
        self.session.start_submit();
    }

    fn request_quit(&mut self) {
        if self.session.is_submitting() {
            self.state.status_message = Some("Submission in progress".to_string());
            return;
        }
        self.quit = true;
    }
}

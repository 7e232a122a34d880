//! Onboarding form state: draft, step position, focus and inline errors

use super::draft::Draft;
use super::field::{FieldKind, FieldSpec};
use super::schema::{fields_for_step, StepValidation};
use super::steps::{Step, StepSequencer};
use crate::catalog::MarketingPlan;
use std::collections::BTreeMap;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons on the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Back,
    Next,
    Submit,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Back => "Back",
            Self::Next => "Next",
            Self::Submit => "Submit",
        }
    }

    /// Back and Submit are locked while a submission runs
    pub fn is_enabled(&self, submitting: bool) -> bool {
        match self {
            Self::Back | Self::Submit => !submitting,
            Self::Next => true,
        }
    }
}

/// State of one onboarding form session
#[derive(Debug, Clone, Default)]
pub struct OnboardingForm {
    pub draft: Draft,
    steps: StepSequencer,
    /// Focus within the current step; one past the last field is the action row
    pub active_field_index: usize,
    /// Highlighted row of the marketing plan checklist
    pub plan_cursor: usize,
    /// Index into `buttons()` when the action row is focused
    pub selected_button: usize,
    errors: BTreeMap<String, String>,
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.steps.current()
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.steps
    }

    /// Fields shown on the current step
    pub fn current_fields(&self) -> Vec<&'static FieldSpec> {
        fields_for_step(self.step()).collect()
    }

    pub fn is_action_row_active(&self) -> bool {
        self.active_field_index >= self.current_fields().len()
    }

    /// Spec of the focused field, `None` on the action row
    pub fn active_spec(&self) -> Option<&'static FieldSpec> {
        self.current_fields().get(self.active_field_index).copied()
    }

    /// Buttons for the current step, left to right
    pub fn buttons(&self) -> Vec<FormButton> {
        let mut buttons = Vec::with_capacity(2);
        if !self.step().is_first() {
            buttons.push(FormButton::Back);
        }
        if self.steps.is_terminal() {
            buttons.push(FormButton::Submit);
        } else {
            buttons.push(FormButton::Next);
        }
        buttons
    }

    pub fn selected_button(&self) -> Option<FormButton> {
        self.buttons().get(self.selected_button).copied()
    }

    pub fn next_button(&mut self) {
        let count = self.buttons().len();
        self.selected_button = (self.selected_button + 1) % count;
    }

    pub fn prev_button(&mut self) {
        let count = self.buttons().len();
        self.selected_button = (self.selected_button + count - 1) % count;
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(spec) = self.active_spec().filter(|s| s.kind.accepts_typing()) {
            self.draft.push_char(spec.name, c);
            self.errors.remove(spec.name);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(spec) = self.active_spec().filter(|s| s.kind.accepts_typing()) {
            self.draft.pop_char(spec.name);
            self.errors.remove(spec.name);
        }
    }

    /// Insert a line break, only in multiline fields. Returns whether it did.
    pub fn newline(&mut self) -> bool {
        match self.active_spec() {
            Some(spec) if spec.kind.is_multiline() => {
                self.draft.push_char(spec.name, '\n');
                self.errors.remove(spec.name);
                true
            }
            _ => false,
        }
    }

    pub fn is_plan_list_active(&self) -> bool {
        self.active_spec()
            .is_some_and(|s| s.kind == FieldKind::MultiSelect)
    }

    pub fn plan_cursor_up(&mut self) {
        self.plan_cursor = self.plan_cursor.saturating_sub(1);
    }

    pub fn plan_cursor_down(&mut self) {
        self.plan_cursor = (self.plan_cursor + 1).min(MarketingPlan::ALL.len() - 1);
    }

    /// Flip the plan under the cursor
    pub fn toggle_plan_at_cursor(&mut self) {
        let Some(spec) = self.active_spec().filter(|s| s.kind == FieldKind::MultiSelect) else {
            return;
        };
        let plan = MarketingPlan::ALL[self.plan_cursor.min(MarketingPlan::ALL.len() - 1)];
        let included = !self.draft.is_selected(spec.name, plan.id());
        self.draft.toggle_multi_value(spec.name, plan.id(), included);
        self.errors.remove(spec.name);
    }

    /// Try to move to the next step, recording inline errors on failure
    pub fn advance(&mut self) -> Result<Step, StepValidation> {
        match self.steps.advance(&self.draft) {
            Ok(step) => {
                self.reset_focus();
                Ok(step)
            }
            Err(check) => {
                self.apply_validation(&check);
                Err(check)
            }
        }
    }

    pub fn retreat(&mut self) -> Step {
        let step = self.steps.retreat();
        self.reset_focus();
        step
    }

    /// Replace inline messages for every field covered by `check`
    pub fn apply_validation(&mut self, check: &StepValidation) {
        for result in &check.results {
            match (&result.message, result.valid) {
                (Some(message), false) => {
                    self.errors.insert(result.field.clone(), message.clone());
                }
                _ => {
                    self.errors.remove(&result.field);
                }
            }
        }
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Steps that currently carry an inline error
    pub fn steps_with_errors(&self) -> Vec<Step> {
        Step::ALL
            .into_iter()
            .filter(|step| fields_for_step(*step).any(|spec| self.errors.contains_key(spec.name)))
            .collect()
    }

    /// Start a fresh session: empty draft, first step
    pub fn reset(&mut self) {
        self.draft.clear();
        self.steps.reset();
        self.errors.clear();
        self.plan_cursor = 0;
        self.reset_focus();
    }

    fn reset_focus(&mut self) {
        self.active_field_index = 0;
        self.selected_button = self.buttons().len() - 1;
    }
}

impl Form for OnboardingForm {
    fn field_count(&self) -> usize {
        self.current_fields().len() + 1 // fields + action row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

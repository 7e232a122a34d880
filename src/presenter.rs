//! Maps submission outcomes to what the user sees

use crate::state::{field_spec, validate_all, OnboardingForm, Step};
use crate::submission::{FailureReason, SubmissionOutcome};

pub const SUCCESS_TITLE: &str = "Onboarding submitted successfully!";
pub const SUCCESS_DESCRIPTION: &str = "We received your details and will reach out shortly.";
pub const FAILURE_TITLE: &str = "Submission failed";
pub const FAILURE_DESCRIPTION: &str = "Please try again or contact us directly.";
pub const INVALID_TITLE: &str = "Some details need attention";

/// User-facing status of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusSignal {
    #[default]
    Idle,
    Pending,
    Success {
        title: String,
        description: String,
    },
    Error {
        title: String,
        description: String,
        /// Whether re-submitting as-is may work
        retryable: bool,
    },
}

impl StatusSignal {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// A dialog is shown for success and error
    pub fn is_dialog(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Error { .. })
    }
}

/// Signal for an outcome, without touching the form
pub fn present(outcome: &SubmissionOutcome) -> StatusSignal {
    match outcome {
        SubmissionOutcome::Idle => StatusSignal::Idle,
        SubmissionOutcome::InFlight => StatusSignal::Pending,
        SubmissionOutcome::Succeeded { .. } => StatusSignal::Success {
            title: SUCCESS_TITLE.to_string(),
            description: SUCCESS_DESCRIPTION.to_string(),
        },
        SubmissionOutcome::Failed(FailureReason::Persistence) => StatusSignal::Error {
            title: FAILURE_TITLE.to_string(),
            description: FAILURE_DESCRIPTION.to_string(),
            retryable: true,
        },
        SubmissionOutcome::Failed(FailureReason::Validation(results)) => {
            let steps: Vec<&str> = Step::ALL
                .into_iter()
                .filter(|step| {
                    results.iter().any(|r| {
                        field_spec(&r.field).is_some_and(|spec| spec.step == *step)
                    })
                })
                .map(|step| step.title())
                .collect();
            StatusSignal::Error {
                title: INVALID_TITLE.to_string(),
                description: format!("Please review: {}", steps.join(", ")),
                retryable: false,
            }
        }
    }
}

/// Present an outcome and update the form to match.
///
/// Success starts a fresh form. A validation failure refreshes every
/// inline message and leaves the user where they are.
pub fn apply(outcome: &SubmissionOutcome, form: &mut OnboardingForm) -> StatusSignal {
    match outcome {
        SubmissionOutcome::Succeeded { .. } => form.reset(),
        SubmissionOutcome::Failed(FailureReason::Validation(_)) => {
            let check = validate_all(&form.draft);
            form.apply_validation(&check);
        }
        _ => {}
    }
    present(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{names, Form, ValidationResult};
    use pretty_assertions::assert_eq;

    fn failing(field: &str) -> ValidationResult {
        ValidationResult {
            field: field.to_string(),
            valid: false,
            message: Some("bad".to_string()),
        }
    }

    #[test]
    fn test_in_flight_is_pending() {
        assert_eq!(present(&SubmissionOutcome::InFlight), StatusSignal::Pending);
        assert_eq!(present(&SubmissionOutcome::Idle), StatusSignal::Idle);
    }

    #[test]
    fn test_notification_gap_is_invisible() {
        assert_eq!(
            present(&SubmissionOutcome::Succeeded { notified: false }),
            present(&SubmissionOutcome::Succeeded { notified: true })
        );
    }

    #[test]
    fn test_persistence_failure_is_retryable() {
        let signal = present(&SubmissionOutcome::Failed(FailureReason::Persistence));
        assert_eq!(
            signal,
            StatusSignal::Error {
                title: "Submission failed".to_string(),
                description: "Please try again or contact us directly.".to_string(),
                retryable: true,
            }
        );
    }

    #[test]
    fn test_validation_failure_names_steps_in_order() {
        let outcome = SubmissionOutcome::Failed(FailureReason::Validation(vec![
            failing(names::PHONE),
            failing(names::COMPANY),
        ]));
        match present(&outcome) {
            StatusSignal::Error {
                description,
                retryable,
                ..
            } => {
                assert_eq!(description, "Please review: Brand, Contact");
                assert!(!retryable);
            }
            other => panic!("unexpected signal: {other:?}"),
        }
    }

    #[test]
    fn test_success_resets_form() {
        let mut form = OnboardingForm::new();
        form.draft.set_field(names::COMPANY, "Acme Co.");
        form.set_active_field(1);

        let signal = apply(&SubmissionOutcome::Succeeded { notified: true }, &mut form);

        assert!(signal.is_dialog());
        assert!(form.draft.is_empty());
        assert_eq!(form.step(), Step::Brand);
        assert_eq!(form.active_field(), 0);
    }

    #[test]
    fn test_validation_failure_sets_inline_errors_and_keeps_draft() {
        let mut form = OnboardingForm::new();
        form.draft.set_field(names::COMPANY, "A");
        let outcome = SubmissionOutcome::Failed(FailureReason::Validation(vec![failing(
            names::COMPANY,
        )]));

        apply(&outcome, &mut form);

        assert_eq!(form.draft.text(names::COMPANY), "A");
        assert_eq!(form.error_for(names::COMPANY), Some("Company name is required"));
        assert!(form.error_for(names::WEBSITE).is_none());
    }

    #[test]
    fn test_persistence_failure_keeps_draft() {
        let mut form = OnboardingForm::new();
        form.draft.set_field(names::COMPANY, "Acme Co.");
        apply(&SubmissionOutcome::Failed(FailureReason::Persistence), &mut form);
        assert_eq!(form.draft.text(names::COMPANY), "Acme Co.");
    }
}

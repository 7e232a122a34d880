//! Result of a submission attempt

use crate::state::ValidationResult;

/// Why a submission attempt did not go through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The draft failed the schema; holds the failing results only
    Validation(Vec<ValidationResult>),
    /// The record store did not accept the record
    Persistence,
}

/// State of the session's submission, owned by the orchestrator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    InFlight,
    /// Record stored. `notified` is false when the notification was lost.
    Succeeded { notified: bool },
    Failed(FailureReason),
}

impl SubmissionOutcome {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

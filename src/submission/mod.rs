//! Submit-time pipeline: validate, persist, then notify

mod orchestrator;
mod outcome;

pub use orchestrator::SubmissionOrchestrator;
pub use outcome::{FailureReason, SubmissionOutcome};

//! One onboarding session: a form, its orchestrator and the visible status

use crate::presenter::{self, StatusSignal};
use crate::state::{OnboardingForm, Step, StepValidation};
use crate::submission::{FailureReason, SubmissionOrchestrator, SubmissionOutcome};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct OnboardingSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub form: OnboardingForm,
    pub status: StatusSignal,
    /// When the last submission attempt finished
    pub last_submitted_at: Option<DateTime<Utc>>,
    orchestrator: Arc<SubmissionOrchestrator>,
    pending: Option<JoinHandle<SubmissionOutcome>>,
}

impl OnboardingSession {
    pub fn new(orchestrator: Arc<SubmissionOrchestrator>) -> Self {
        let id = Uuid::new_v4();
        info!(session_id = %id, "onboarding session started");
        Self {
            id,
            started_at: Utc::now(),
            form: OnboardingForm::new(),
            status: StatusSignal::Idle,
            last_submitted_at: None,
            orchestrator,
            pending: None,
        }
    }

    /// Gated move to the next step
    pub fn advance(&mut self) -> Result<Step, StepValidation> {
        let result = self.form.advance();
        if let Err(check) = &result {
            debug!(
                session_id = %self.id,
                step = self.form.step().title(),
                failing = check.errors().count(),
                "step gate rejected"
            );
        }
        result
    }

    pub fn retreat(&mut self) -> Step {
        self.form.retreat()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some() || self.orchestrator.is_in_flight()
    }

    /// Submit and wait for the outcome
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> StatusSignal {
        if !self.can_submit() {
            return self.status.clone();
        }
        let outcome = self.orchestrator.submit(&self.form.draft.snapshot()).await;
        self.finish(outcome)
    }

    /// Submit in the background; collect the outcome with `poll_submit`
    pub fn start_submit(&mut self) {
        if !self.can_submit() {
            return;
        }
        let orchestrator = self.orchestrator.clone();
        let draft = self.form.draft.snapshot();
        self.status = StatusSignal::Pending;
        self.pending = Some(tokio::spawn(async move { orchestrator.submit(&draft).await }));
    }

    /// Apply the background outcome once it is ready
    pub async fn poll_submit(&mut self) -> Option<StatusSignal> {
        if !self.pending.as_ref().is_some_and(|h| h.is_finished()) {
            return None;
        }
        let handle = self.pending.take()?;
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                // Whether the record was stored is unknown, so offer a retry
                warn!(session_id = %self.id, error = %e, "submission task failed");
                self.orchestrator.clear();
                SubmissionOutcome::Failed(FailureReason::Persistence)
            }
        };
        Some(self.finish(outcome))
    }

    /// Close the outcome dialog
    pub fn dismiss_status(&mut self) {
        if !self.status.is_pending() {
            self.status = StatusSignal::Idle;
            self.orchestrator.clear();
        }
    }

    fn can_submit(&self) -> bool {
        if !self.form.step().is_terminal() {
            debug!(session_id = %self.id, step = self.form.step().title(), "submit outside final step ignored");
            return false;
        }
        if self.pending.is_some() {
            debug!(session_id = %self.id, "duplicate submit ignored");
            return false;
        }
        true
    }

    fn finish(&mut self, outcome: SubmissionOutcome) -> StatusSignal {
        // A rejected duplicate leaves the running attempt in charge of the status
        if outcome.is_in_flight() {
            return self.status.clone();
        }
        self.last_submitted_at = Some(Utc::now());
        if outcome.is_success() {
            let elapsed = Utc::now() - self.started_at;
            info!(
                session_id = %self.id,
                elapsed_secs = elapsed.num_seconds(),
                "onboarding submitted"
            );
        }
        self.status = presenter::apply(&outcome, &mut self.form);
        self.status.clone()
    }
}

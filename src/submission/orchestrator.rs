//! Two-phase submit: the record is stored first, the notification is best effort

use super::outcome::{FailureReason, SubmissionOutcome};
use crate::services::{NotificationPayload, Notifier, OnboardingRecord, RecordStore, ServiceError};
use crate::state::{validate_all, Draft};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Runs submissions for one form session
pub struct SubmissionOrchestrator {
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
    timeout: Duration,
    in_flight: AtomicBool,
    outcome: Mutex<SubmissionOutcome>,
}

/// Clears the in-flight flag when the submission future finishes or is dropped
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SubmissionOrchestrator {
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>, timeout: Duration) -> Self {
        Self {
            store,
            notifier,
            timeout,
            in_flight: AtomicBool::new(false),
            outcome: Mutex::new(SubmissionOutcome::Idle),
        }
    }

    /// Current outcome
    pub fn outcome(&self) -> SubmissionOutcome {
        self.outcome.lock().clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Back to `Idle`, unless a submission is running
    pub fn clear(&self) {
        if !self.is_in_flight() {
            *self.outcome.lock() = SubmissionOutcome::Idle;
        }
    }

    /// Validate, persist, then notify.
    ///
    /// A call made while another is running is ignored and returns `InFlight`.
    /// Neither collaborator is contacted for an invalid draft, and the notifier
    /// is only contacted after the store accepted the record.
    pub async fn submit(&self, draft: &Draft) -> SubmissionOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("duplicate submit ignored while in flight");
            return SubmissionOutcome::InFlight;
        };

        let check = validate_all(draft);
        if !check.valid {
            let failing: Vec<_> = check.errors().cloned().collect();
            debug!(fields = failing.len(), "submission rejected by validation");
            return self.finish(SubmissionOutcome::Failed(FailureReason::Validation(failing)));
        }

        self.set(SubmissionOutcome::InFlight);
        let record = OnboardingRecord::from_draft(&draft.snapshot());

        if let Err(e) = self.bounded(self.store.insert(&record)).await {
            error!(error = %e, company = %record.company, "failed to persist onboarding record");
            return self.finish(SubmissionOutcome::Failed(FailureReason::Persistence));
        }
        info!(company = %record.company, "onboarding record stored");

        let payload = NotificationPayload::from_record(&record);
        let notified = match self.bounded(self.notifier.notify(&payload)).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, email = %record.email, "onboarding notification not delivered");
                false
            }
        };

        self.finish(SubmissionOutcome::Succeeded { notified })
    }

    async fn bounded<F>(&self, call: F) -> Result<(), ServiceError>
    where
        F: Future<Output = Result<(), ServiceError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::Timeout(self.timeout)),
        }
    }

    fn set(&self, outcome: SubmissionOutcome) {
        *self.outcome.lock() = outcome;
    }

    fn finish(&self, outcome: SubmissionOutcome) -> SubmissionOutcome {
        self.set(outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MockNotifier, MockRecordStore};
    use crate::state::names;
    use async_trait::async_trait;
    use mockall::Sequence;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn valid_draft() -> Draft {
        let mut draft = Draft::new();
        draft.set_field(names::COMPANY, "Acme Co.");
        draft.set_field(names::WEBSITE, "");
        draft.set_field(names::CONTACT_NAME, "Jane Doe");
        draft.set_field(names::EMAIL, "jane@acme.com");
        draft.set_field(names::PHONE, "9876543210");
        draft.set_field(names::GOALS, "Grow Instagram reach and launch a campaign");
        draft.toggle_multi_value(names::SERVICES, "social-media", true);
        draft.set_field(names::BUDGET, "₹20,000–₹50,000");
        draft.set_field(names::TIMELINE, "Start next month");
        draft
    }

    fn orchestrator(store: MockRecordStore, notifier: MockNotifier) -> SubmissionOrchestrator {
        SubmissionOrchestrator::new(Arc::new(store), Arc::new(notifier), TIMEOUT)
    }

    fn unavailable() -> ServiceError {
        ServiceError::Status {
            status: 503,
            body: "unavailable".to_string(),
        }
    }

    /// Store that takes a while and counts its calls
    #[derive(Default)]
    struct SlowStore {
        calls: AtomicUsize,
        delay: Duration,
    }

    #[async_trait]
    impl RecordStore for SlowStore {
        async fn insert(&self, _record: &OnboardingRecord) -> Result<(), ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingNotifier {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Notifier for CountingNotifier {
        async fn notify(&self, _payload: &NotificationPayload) -> Result<(), ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    mod ordering {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_persists_before_notifying() {
            let mut seq = Sequence::new();
            let mut store = MockRecordStore::new();
            let mut notifier = MockNotifier::new();
            store
                .expect_insert()
                .times(1)
                .in_sequence(&mut seq)
                .withf(|record| {
                    record.company == "Acme Co."
                        && record.website.is_none()
                        && record.selected_services == vec!["social-media".to_string()]
                })
                .returning(|_| Ok(()));
            notifier
                .expect_notify()
                .times(1)
                .in_sequence(&mut seq)
                .withf(|payload| {
                    payload.service_labels
                        == vec!["Social Media Marketing (₹15,000 - ₹35,000/month)".to_string()]
                })
                .returning(|_| Ok(()));

            let orchestrator = orchestrator(store, notifier);
            let outcome = orchestrator.submit(&valid_draft()).await;

            assert_eq!(outcome, SubmissionOutcome::Succeeded { notified: true });
            assert_eq!(orchestrator.outcome(), outcome);
            assert!(!orchestrator.is_in_flight());
        }

        #[tokio::test]
        async fn test_notification_failure_still_succeeds() {
            let mut store = MockRecordStore::new();
            let mut notifier = MockNotifier::new();
            store.expect_insert().times(1).returning(|_| Ok(()));
            notifier
                .expect_notify()
                .times(1)
                .returning(|_| Err(ServiceError::Rejected("smtp down".to_string())));

            let outcome = orchestrator(store, notifier).submit(&valid_draft()).await;
            assert_eq!(outcome, SubmissionOutcome::Succeeded { notified: false });
        }

        #[tokio::test]
        async fn test_persistence_failure_skips_notification() {
            let mut store = MockRecordStore::new();
            let mut notifier = MockNotifier::new();
            store.expect_insert().times(1).returning(|_| Err(unavailable()));
            notifier.expect_notify().never();

            let orchestrator = orchestrator(store, notifier);
            let outcome = orchestrator.submit(&valid_draft()).await;

            assert_eq!(outcome, SubmissionOutcome::Failed(FailureReason::Persistence));
            assert!(!orchestrator.is_in_flight());
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_draft_contacts_nobody() {
            let mut store = MockRecordStore::new();
            let mut notifier = MockNotifier::new();
            store.expect_insert().never();
            notifier.expect_notify().never();

            let mut draft = valid_draft();
            draft.set_field(names::PHONE, "12345");

            let outcome = orchestrator(store, notifier).submit(&draft).await;
            match outcome {
                SubmissionOutcome::Failed(FailureReason::Validation(results)) => {
                    assert_eq!(results.len(), 1);
                    assert_eq!(results[0].field, names::PHONE);
                    assert!(!results[0].valid);
                }
                other => panic!("unexpected outcome: {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_can_resubmit_after_validation_failure() {
            let mut store = MockRecordStore::new();
            let mut notifier = MockNotifier::new();
            store.expect_insert().times(1).returning(|_| Ok(()));
            notifier.expect_notify().times(1).returning(|_| Ok(()));
            let orchestrator = orchestrator(store, notifier);

            let mut draft = valid_draft();
            draft.set_field(names::EMAIL, "not-an-email");
            assert!(!orchestrator.submit(&draft).await.is_success());

            draft.set_field(names::EMAIL, "jane@acme.com");
            assert!(orchestrator.submit(&draft).await.is_success());
        }
    }

    mod concurrency {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_duplicate_submit_while_in_flight_is_ignored() {
            let store = Arc::new(SlowStore {
                delay: Duration::from_millis(100),
                ..Default::default()
            });
            let notifier = Arc::new(CountingNotifier::default());
            let orchestrator =
                SubmissionOrchestrator::new(store.clone(), notifier.clone(), TIMEOUT);
            let draft = valid_draft();

            let (first, second) =
                tokio::join!(orchestrator.submit(&draft), orchestrator.submit(&draft));

            assert_eq!(first, SubmissionOutcome::Succeeded { notified: true });
            assert_eq!(second, SubmissionOutcome::InFlight);
            assert_eq!(store.calls.load(Ordering::SeqCst), 1);
            assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_persistence_timeout_fails_and_releases_guard() {
            let store = Arc::new(SlowStore {
                delay: Duration::from_secs(30),
                ..Default::default()
            });
            let notifier = Arc::new(CountingNotifier::default());
            let orchestrator = SubmissionOrchestrator::new(
                store.clone(),
                notifier.clone(),
                Duration::from_millis(20),
            );

            let outcome = orchestrator.submit(&valid_draft()).await;

            assert_eq!(outcome, SubmissionOutcome::Failed(FailureReason::Persistence));
            assert_eq!(notifier.calls.load(Ordering::SeqCst), 0);
            assert!(!orchestrator.is_in_flight());
        }

        #[tokio::test]
        async fn test_clear_resets_outcome() {
            let mut store = MockRecordStore::new();
            store.expect_insert().returning(|_| Err(unavailable()));
            let orchestrator = orchestrator(store, MockNotifier::new());

            orchestrator.submit(&valid_draft()).await;
            orchestrator.clear();
            assert_eq!(orchestrator.outcome(), SubmissionOutcome::Idle);
        }
    }
}

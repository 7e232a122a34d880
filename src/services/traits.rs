//! Trait abstraction for the downstream collaborators to enable mocking in tests

use super::error::ServiceError;
use super::payload::{NotificationPayload, OnboardingRecord};
use async_trait::async_trait;

/// Durable store for submitted onboarding records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert one record
    async fn insert(&self, record: &OnboardingRecord) -> Result<(), ServiceError>;
}

/// Sends the courtesy/alert notification for a stored record
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one notification
    async fn notify(&self, payload: &NotificationPayload) -> Result<(), ServiceError>;
}

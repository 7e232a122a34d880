//! Downstream collaborators: the record store and the notifier

mod error;
mod function;
mod payload;
mod supabase;
mod traits;

pub use error::ServiceError;
pub use function::FunctionNotifier;
pub use payload::{NotificationPayload, OnboardingRecord};
pub use supabase::SupabaseStore;
pub use traits::{Notifier, RecordStore};

#[cfg(test)]
pub use traits::{MockNotifier, MockRecordStore};

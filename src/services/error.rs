//! Collaborator failure taxonomy

use std::time::Duration;
use thiserror::Error;

/// Failure of a record store or notifier call
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request could not be sent or the response could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The collaborator answered with a non-success status
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The collaborator answered successfully but reported a failure
    #[error("rejected: {0}")]
    Rejected(String),

    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// Endpoint configuration is missing or unusable
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ServiceError::Status {
            status: 409,
            body: "duplicate key".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 409: duplicate key");
    }

    #[test]
    fn test_timeout_display() {
        let err = ServiceError::Timeout(Duration::from_secs(15));
        assert_eq!(err.to_string(), "no response within 15s");
    }

    #[test]
    fn test_config_display() {
        let err = ServiceError::Config("supabase_url is not set".to_string());
        assert!(err.to_string().contains("supabase_url"));
    }
}

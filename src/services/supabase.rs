//! Record store backed by the Supabase REST (PostgREST) API

use super::error::ServiceError;
use super::payload::OnboardingRecord;
use super::traits::RecordStore;
use crate::config::ResolvedConfig;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

/// Project URL plus the anon key sent on every request
#[derive(Debug, Clone)]
pub struct SupabaseAuth {
    base_url: String,
    anon_key: String,
}

impl SupabaseAuth {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// Absolute URL for a path below the project URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }
}

/// Turn a non-2xx response into `ServiceError::Status`
pub(crate) async fn error_for_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Inserts onboarding rows into a table
pub struct SupabaseStore {
    client: Client,
    auth: SupabaseAuth,
    table: String,
}

impl SupabaseStore {
    pub fn new(client: Client, auth: SupabaseAuth, table: &str) -> Self {
        Self {
            client,
            auth,
            table: table.to_string(),
        }
    }

    pub fn from_config(client: Client, config: &ResolvedConfig) -> Self {
        Self::new(
            client,
            SupabaseAuth::new(&config.supabase_url, &config.supabase_anon_key),
            &config.submissions_table,
        )
    }
}

#[async_trait]
impl RecordStore for SupabaseStore {
    async fn insert(&self, record: &OnboardingRecord) -> Result<(), ServiceError> {
        let url = self.auth.url(&format!("rest/v1/{}", self.table));
        let response = self
            .auth
            .apply(self.client.post(url))
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;
        error_for_status(response).await?;
        Ok(())
    }
}

//! Notifier that invokes the onboarding email edge function

use super::error::ServiceError;
use super::payload::NotificationPayload;
use super::supabase::{error_for_status, SupabaseAuth};
use super::traits::Notifier;
use crate::config::ResolvedConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Body returned by the notification function
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Calls `functions/v1/<name>` with the notification payload
pub struct FunctionNotifier {
    client: Client,
    auth: SupabaseAuth,
    function: String,
}

impl FunctionNotifier {
    pub fn new(client: Client, auth: SupabaseAuth, function: &str) -> Self {
        Self {
            client,
            auth,
            function: function.to_string(),
        }
    }

    pub fn from_config(client: Client, config: &ResolvedConfig) -> Self {
        Self::new(
            client,
            SupabaseAuth::new(&config.supabase_url, &config.supabase_anon_key),
            &config.notify_function,
        )
    }
}

#[async_trait]
impl Notifier for FunctionNotifier {
    async fn notify(&self, payload: &NotificationPayload) -> Result<(), ServiceError> {
        let url = self.auth.url(&format!("functions/v1/{}", self.function));
        let response = self
            .auth
            .apply(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        let response = error_for_status(response).await?;

        // An empty or non-JSON 2xx body still counts as delivered
        let body: NotifyResponse = response.json().await.unwrap_or_default();
        if let Some(error) = body.error {
            return Err(ServiceError::Rejected(error));
        }
        if body.success == Some(false) {
            return Err(ServiceError::Rejected(
                body.message.unwrap_or_else(|| "function reported failure".to_string()),
            ));
        }
        Ok(())
    }
}

//! Configuration handling

use crate::services::ServiceError;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SUBMISSIONS_TABLE: &str = "onboarding_submissions";
pub const DEFAULT_NOTIFY_FUNCTION: &str = "send-onboarding-email";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_NOTIFY_LISTEN_ADDR: &str = "127.0.0.1:54321";

/// User configuration, every field optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Supabase project URL
    pub supabase_url: Option<String>,
    /// Public anon key
    pub supabase_anon_key: Option<String>,
    pub submissions_table: Option<String>,
    /// Edge function invoked after a record is stored
    pub notify_function: Option<String>,
    /// Deadline for each collaborator call
    pub request_timeout_secs: Option<u64>,
    /// Bind address for `serve-notify`
    pub notify_listen_addr: Option<String>,
}

/// Configuration with defaults applied and required values checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub submissions_table: String,
    pub notify_function: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "rabt", "rabt-onboard")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the TUI log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from the platform config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file, defaults when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform config file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Overlay `RABT_*` environment variables on top of file values
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("RABT_SUPABASE_URL") {
            self.supabase_url = Some(v);
        }
        if let Some(v) = lookup("RABT_SUPABASE_ANON_KEY") {
            self.supabase_anon_key = Some(v);
        }
        if let Some(v) = lookup("RABT_SUBMISSIONS_TABLE") {
            self.submissions_table = Some(v);
        }
        if let Some(v) = lookup("RABT_NOTIFY_FUNCTION") {
            self.notify_function = Some(v);
        }
        if let Some(v) = lookup("RABT_REQUEST_TIMEOUT_SECS") {
            match v.parse() {
                Ok(secs) => self.request_timeout_secs = Some(secs),
                Err(_) => tracing::warn!(value = %v, "ignoring invalid RABT_REQUEST_TIMEOUT_SECS"),
            }
        }
        if let Some(v) = lookup("RABT_NOTIFY_LISTEN_ADDR") {
            self.notify_listen_addr = Some(v);
        }
        self
    }

    /// Bind address for the notification endpoint
    pub fn listen_addr(&self) -> String {
        self.notify_listen_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_NOTIFY_LISTEN_ADDR.to_string())
    }

    /// Apply defaults and require the Supabase endpoint settings
    pub fn resolve(&self) -> Result<ResolvedConfig, ServiceError> {
        let required = |value: &Option<String>, key: &str| {
            value
                .clone()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ServiceError::Config(format!("{key} is not set")))
        };

        let supabase_url = required(&self.supabase_url, "supabase_url")?;
        url::Url::parse(&supabase_url)
            .map_err(|e| ServiceError::Config(format!("supabase_url is invalid: {e}")))?;

        Ok(ResolvedConfig {
            supabase_url,
            supabase_anon_key: required(&self.supabase_anon_key, "supabase_anon_key")?,
            submissions_table: self
                .submissions_table
                .clone()
                .unwrap_or_else(|| DEFAULT_SUBMISSIONS_TABLE.to_string()),
            notify_function: self
                .notify_function
                .clone()
                .unwrap_or_else(|| DEFAULT_NOTIFY_FUNCTION.to_string()),
            request_timeout: Duration::from_secs(
                self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        })
    }
}

use crate::error::{OrchestratorError, Result};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_DEPLOYMENT: &str = "gpt-4o";
pub const DEFAULT_API_VERSION: &str = "2025-01-01-preview";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Clone)]
pub struct Config {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    pub api_version: String,
    pub timeout_secs: u64,
    pub task: Option<String>,
}

/// Log filter used when `RUST_LOG` is unset.
pub fn log_level_from_env() -> String {
    dotenvy::dotenv().ok();
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| OrchestratorError::Config(format!("{} must be set", key)))
        };

        let timeout_secs = match lookup("ORCHESTRATION_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                OrchestratorError::Config(format!(
                    "ORCHESTRATION_TIMEOUT_SECS is not a number: {}",
                    raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            endpoint: required("AZURE_OPENAI_ENDPOINT")?,
            api_key: required("AZURE_OPENAI_API_KEY")?,
            deployment: lookup("AZURE_OPENAI_DEPLOYMENT")
                .unwrap_or_else(|| DEFAULT_DEPLOYMENT.to_string()),
            api_version: lookup("AZURE_OPENAI_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout_secs,
            task: lookup("FEEDBACK_TASK").filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full chat-completions URL. An endpoint that already points at
    /// `/chat/completions` is taken verbatim.
    pub fn chat_completions_url(&self) -> String {
        if self.endpoint.contains("/chat/completions") {
            return self.endpoint.clone();
        }
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("task", &self.task.as_ref().map(|_| "<set>"))
            .finish()
    }
}

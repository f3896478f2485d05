use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Chat completion API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Chat completion returned no content")]
    EmptyResponse,

    #[error("Orchestration has no member agents")]
    NoAgents,

    #[error("Runtime is not running")]
    RuntimeNotRunning,

    #[error("Runtime already started")]
    AlreadyStarted,

    #[error("Timed out after {0:?} waiting for orchestration result")]
    Timeout(Duration),

    #[error("Orchestration was cancelled before producing a result")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_includes_status_and_body() {
        let err = OrchestratorError::Api {
            status: 401,
            body: "Access denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Chat completion API returned 401: Access denied"
        );
    }

    #[test]
    fn timeout_reports_duration() {
        let err = OrchestratorError::Timeout(Duration::from_secs(20));
        assert_eq!(
            err.to_string(),
            "Timed out after 20s waiting for orchestration result"
        );
    }
}

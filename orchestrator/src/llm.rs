// Chat-completion service shared by every agent

use crate::config::Config;
use crate::error::{OrchestratorError, Result};
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error};

#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Sends the conversation and returns the assistant's reply text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;

    fn deployment(&self) -> &str;
}

/// Azure OpenAI chat-completions client authenticated with an `api-key` header.
pub struct AzureChatCompletion {
    client: reqwest::Client,
    url: String,
    api_key: String,
    deployment: String,
}

impl AzureChatCompletion {
    /// Each HTTP call is bounded by `request_timeout`.
    pub fn new(
        url: String,
        api_key: String,
        deployment: String,
        request_timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            client,
            url,
            api_key,
            deployment,
        })
    }

    /// Requests share the orchestration timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.chat_completions_url(),
            config.api_key.clone(),
            config.deployment.clone(),
            config.timeout(),
        )
    }
}

#[async_trait]
impl ChatCompletion for AzureChatCompletion {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        debug!("Sending {} messages to deployment {}", messages.len(), self.deployment);

        let resp = self
            .client
            .post(&self.url)
            .header("api-key", &self.api_key)
            .json(&ChatCompletionRequest { messages })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!("Chat completion failed with {}: {}", status, body);
            return Err(OrchestratorError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatCompletionResponse = serde_json::from_slice(&resp.bytes().await?)?;
        body.into_content().ok_or(OrchestratorError::EmptyResponse)
    }

    fn deployment(&self) -> &str {
        &self.deployment
    }
}

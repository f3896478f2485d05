// In-memory chat service for unit tests

use crate::error::{OrchestratorError, Result};
use crate::llm::ChatCompletion;
use crate::models::ChatMessage;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Replays queued replies and records every conversation it receives.
pub struct ScriptedChat {
    replies: Mutex<VecDeque<Result<String>>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
    delay: Option<Duration>,
}

impl ScriptedChat {
    pub fn new(replies: Vec<Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for ScriptedChat {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.calls.lock().unwrap().push(messages.to_vec());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(OrchestratorError::EmptyResponse))
    }

    fn deployment(&self) -> &str {
        "scripted"
    }
}

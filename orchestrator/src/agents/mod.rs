use crate::error::Result;
use crate::llm::ChatCompletion;
use crate::models::{AgentResponse, ChatMessage};
use std::sync::Arc;
use tracing::{info, instrument};

pub mod summarizer;
pub mod classifier;
pub mod action;

/// A named instruction prompt bound to a shared chat-completion service.
#[derive(Clone)]
pub struct ChatCompletionAgent {
    name: String,
    instructions: String,
    service: Arc<dyn ChatCompletion>,
}

impl ChatCompletionAgent {
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        service: Arc<dyn ChatCompletion>,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            service,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    #[instrument(skip(self, input), fields(agent = %self.name))]
    pub async fn invoke(&self, input: &str) -> Result<AgentResponse> {
        info!("{}: invoking {}", self.name, self.service.deployment());

        let messages = [
            ChatMessage::system(self.instructions.trim()),
            ChatMessage::user(input.trim()),
        ];
        let content = self.service.complete(&messages).await?;

        Ok(AgentResponse {
            name: self.name.clone(),
            content,
        })
    }
}

/// The feedback triage members, in the order they must run.
pub fn feedback_agents(service: Arc<dyn ChatCompletion>) -> Vec<ChatCompletionAgent> {
    vec![
        summarizer::agent(service.clone()),
        classifier::agent(service.clone()),
        action::agent(service),
    ]
}

// Summarizer Agent: condenses the raw feedback into one neutral sentence

use super::ChatCompletionAgent;
use crate::llm::ChatCompletion;
use std::sync::Arc;

pub const NAME: &str = "SummarizerAgent";

pub const INSTRUCTIONS: &str = "
Summarize the customer's feedback in one short sentence. Keep it neutral and concise.
Example output:
App crashes during photo upload.
User praises dark mode feature.
";

pub fn agent(service: Arc<dyn ChatCompletion>) -> ChatCompletionAgent {
    ChatCompletionAgent::new(NAME, INSTRUCTIONS, service)
}

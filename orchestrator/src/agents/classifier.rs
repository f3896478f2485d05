// Classifier Agent: labels the summary as Positive, Negative or Feature request

use super::ChatCompletionAgent;
use crate::llm::ChatCompletion;
use std::sync::Arc;

pub const NAME: &str = "ClassifierAgent";

pub const INSTRUCTIONS: &str = "
Classify the feedback as one of the following: Positive, Negative, or Feature request.
";

pub fn agent(service: Arc<dyn ChatCompletion>) -> ChatCompletionAgent {
    ChatCompletionAgent::new(NAME, INSTRUCTIONS, service)
}

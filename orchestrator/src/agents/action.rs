// Action Agent: recommends the next step from summary and classification

use super::ChatCompletionAgent;
use crate::llm::ChatCompletion;
use std::sync::Arc;

pub const NAME: &str = "ActionAgent";

pub const INSTRUCTIONS: &str = "
Based on the summary and classification, suggest the next action in one short sentence.
Example output:
Escalate as a high-priority bug for the mobile team.
Log as positive feedback to share with design and marketing.
Log as enhancement request for product backlog.
";

pub fn agent(service: Arc<dyn ChatCompletion>) -> ChatCompletionAgent {
    ChatCompletionAgent::new(NAME, INSTRUCTIONS, service)
}

// Sequential orchestration: feeds a task through member agents in order

use crate::agents::ChatCompletionAgent;
use crate::error::{OrchestratorError, Result};
use crate::models::AgentResponse;
use crate::runtime::InProcessRuntime;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{error, info};
use uuid::Uuid;

pub type ResponseCallback = Arc<dyn Fn(&AgentResponse) + Send + Sync>;

pub struct SequentialOrchestration {
    members: Vec<ChatCompletionAgent>,
    response_callback: Option<ResponseCallback>,
}

impl SequentialOrchestration {
    pub fn new(members: Vec<ChatCompletionAgent>) -> Self {
        Self {
            members,
            response_callback: None,
        }
    }

    pub fn with_response_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&AgentResponse) + Send + Sync + 'static,
    {
        self.response_callback = Some(Arc::new(callback));
        self
    }

    /// Schedules the run on `runtime` and returns a handle to its final value.
    pub async fn invoke(&self, task: &str, runtime: &InProcessRuntime) -> Result<OrchestrationResult> {
        if self.members.is_empty() {
            return Err(OrchestratorError::NoAgents);
        }

        let run_id = Uuid::new_v4();
        info!("Orchestration [{}]: scheduling {} agents", run_id, self.members.len());

        let (sender, receiver) = oneshot::channel();
        let members = self.members.clone();
        let callback = self.response_callback.clone();
        let task = task.to_string();

        runtime.submit(async move {
            let outcome = run_in_sequence(run_id, &members, callback.as_ref(), task).await;
            if let Err(e) = &outcome {
                error!("Orchestration [{}] failed: {}", run_id, e);
            }
            // Receiver may already be gone after a timeout.
            let _ = sender.send(outcome);
        })?;

        Ok(OrchestrationResult { run_id, receiver })
    }
}

async fn run_in_sequence(
    run_id: Uuid,
    members: &[ChatCompletionAgent],
    callback: Option<&ResponseCallback>,
    task: String,
) -> Result<String> {
    let mut current = task;
    for (step, agent) in members.iter().enumerate() {
        info!("Orchestration [{}]: step {} -> {}", run_id, step + 1, agent.name());
        let response = agent.invoke(&current).await?;
        if let Some(callback) = callback {
            callback(&response);
        }
        current = response.content;
    }
    Ok(current)
}

/// Pending final value of one orchestration run.
pub struct OrchestrationResult {
    run_id: Uuid,
    receiver: oneshot::Receiver<Result<String>>,
}

impl OrchestrationResult {
    pub async fn get(self, timeout: Duration) -> Result<String> {
        match tokio::time::timeout(timeout, self.receiver).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => {
                error!("Orchestration [{}] dropped without a result", self.run_id);
                Err(OrchestratorError::Cancelled)
            }
            Err(_) => Err(OrchestratorError::Timeout(timeout)),
        }
    }
}

// In-process runtime: a single dispatcher task that runs submitted jobs in order

use crate::error::{OrchestratorError, Result};
use futures::future::BoxFuture;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

type Job = BoxFuture<'static, ()>;

#[derive(Default)]
pub struct InProcessRuntime {
    sender: Option<mpsc::UnboundedSender<Job>>,
    dispatcher: Option<JoinHandle<usize>>,
}

impl InProcessRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the dispatcher on the current tokio runtime.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(OrchestratorError::AlreadyStarted);
        }

        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();
        let dispatcher = tokio::spawn(async move {
            let mut completed = 0;
            while let Some(job) = receiver.recv().await {
                job.await;
                completed += 1;
                debug!("Runtime: job {} finished", completed);
            }
            completed
        });

        self.sender = Some(sender);
        self.dispatcher = Some(dispatcher);
        info!("Runtime started");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.sender.is_some()
    }

    pub fn submit<F>(&self, job: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let sender = self.sender.as_ref().ok_or(OrchestratorError::RuntimeNotRunning)?;
        sender
            .send(Box::pin(job))
            .map_err(|_| OrchestratorError::RuntimeNotRunning)
    }

    /// Closes the queue and waits until every queued job has run.
    pub async fn stop_when_idle(&mut self) {
        // Dropping the sender ends the dispatcher loop once the queue drains.
        self.sender.take();

        if let Some(dispatcher) = self.dispatcher.take() {
            match dispatcher.await {
                Ok(completed) => info!("Runtime stopped after {} jobs", completed),
                Err(e) => error!("Runtime dispatcher failed: {}", e),
            }
        }
    }
}

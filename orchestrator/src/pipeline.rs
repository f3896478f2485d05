use crate::console::{format_failure, format_final_report};
use crate::error::Result;
use crate::orchestration::SequentialOrchestration;
use crate::runtime::InProcessRuntime;
use std::io::Write;
use std::time::Duration;
use tracing::{error, info};

pub const SAMPLE_FEEDBACK: &str = "
I tried updating my profile picture several times today, but the app kept freezing halfway through the process.
I had to restart it three times, and in the end, the picture still wouldn't upload.
It's really frustrating and makes the app feel unreliable.
";

/// Runs one orchestration end to end and writes the report to `out`.
///
/// Any orchestration failure is reported as a single line and yields
/// `Ok(None)`. The runtime is stopped on every path; only write errors on
/// `out` are returned.
pub async fn run_pipeline<W: Write>(
    orchestration: &SequentialOrchestration,
    runtime: &mut InProcessRuntime,
    task: &str,
    timeout: Duration,
    out: &mut W,
) -> std::io::Result<Option<String>> {
    let outcome = execute(orchestration, runtime, task, timeout).await;

    let report = match &outcome {
        Ok(value) => {
            info!("Orchestration completed");
            writeln!(out, "{}", format_final_report(task, value))
        }
        Err(e) => {
            error!("Orchestration failed: {}", e);
            writeln!(out, "{}", format_failure(e))
        }
    };

    runtime.stop_when_idle().await;
    report?;
    Ok(outcome.ok())
}

async fn execute(
    orchestration: &SequentialOrchestration,
    runtime: &mut InProcessRuntime,
    task: &str,
    timeout: Duration,
) -> Result<String> {
    runtime.start()?;
    let result = orchestration.invoke(task, runtime).await?;
    result.get(timeout).await
}

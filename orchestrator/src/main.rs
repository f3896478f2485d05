use feedback_orchestrator::agents::feedback_agents;
use feedback_orchestrator::config::{self, Config};
use feedback_orchestrator::console::print_agent_response;
use feedback_orchestrator::llm::{AzureChatCompletion, ChatCompletion};
use feedback_orchestrator::orchestration::SequentialOrchestration;
use feedback_orchestrator::pipeline::{run_pipeline, SAMPLE_FEEDBACK};
use feedback_orchestrator::runtime::InProcessRuntime;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the agent report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config::log_level_from_env())),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Starting customer feedback orchestration");

    // Load configuration
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    info!("Configuration loaded: {:?}", config);

    let service: Arc<dyn ChatCompletion> = Arc::new(AzureChatCompletion::from_config(&config)?);
    let orchestration = SequentialOrchestration::new(feedback_agents(service))
        .with_response_callback(print_agent_response);

    let task = config.task.as_deref().unwrap_or(SAMPLE_FEEDBACK);
    let mut runtime = InProcessRuntime::new();

    run_pipeline(
        &orchestration,
        &mut runtime,
        task,
        config.timeout(),
        &mut std::io::stdout(),
    )
    .await?;

    Ok(())
}

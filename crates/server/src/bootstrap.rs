use std::sync::Arc;

use revrec_agent::{AgentRuntime, ToolError};
use revrec_core::config::{AppConfig, ConfigError};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub agent_runtime: Arc<AgentRuntime>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("agent runtime setup failed: {0}")]
    Runtime(#[from] ToolError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        backend_url = %config.backend.base_url,
        "starting application bootstrap"
    );

    let agent_runtime = AgentRuntime::from_config(&config.backend)?;
    info!(
        event_name = "system.bootstrap.functions_registered",
        correlation_id = "bootstrap",
        function_count = agent_runtime.registry().len(),
        "agent functions registered"
    );

    Ok(Application { config, agent_runtime: Arc::new(agent_runtime) })
}

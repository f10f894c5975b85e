use std::sync::Arc;

use revrec_core::config::BackendConfig;
use serde::Serialize;
use tracing::{info, warn};

use crate::backend::{Backend, HttpBackend};
use crate::call::{render_result, FuncCall};
use crate::errors::ToolError;
use crate::functions::default_registry;
use crate::prompt::{few_shot_blocks, BASE_PROMPT};
use crate::tools::ToolRegistry;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// What the agent framework needs to drive this agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AgentMetadata {
    pub base_prompt: &'static str,
    pub few_shots: Vec<&'static str>,
    pub funcs: Vec<FunctionInfo>,
}

pub struct AgentRuntime {
    registry: ToolRegistry,
    backend: Arc<dyn Backend>,
}

impl AgentRuntime {
    pub fn new(registry: ToolRegistry, backend: Arc<dyn Backend>) -> Self {
        Self { registry, backend }
    }

    /// Runtime with every function registered against the HTTP backend.
    pub fn from_config(config: &BackendConfig) -> Result<Self, ToolError> {
        let backend = HttpBackend::from_config(config)?;
        Ok(Self::new(default_registry()?, Arc::new(backend)))
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn functions(&self) -> Vec<FunctionInfo> {
        self.registry
            .iter()
            .map(|tool| FunctionInfo { name: tool.name(), description: tool.description() })
            .collect()
    }

    pub fn metadata(&self) -> AgentMetadata {
        AgentMetadata {
            base_prompt: BASE_PROMPT,
            few_shots: few_shot_blocks(),
            funcs: self.functions(),
        }
    }

    pub async fn invoke(&self, name: &str, input: &str) -> Result<String, ToolError> {
        match self.registry.invoke(self.backend.as_ref(), name, input).await {
            Ok(output) => {
                info!(
                    event_name = "agent.function.completed",
                    function = name,
                    output_len = output.len(),
                    "registered function completed"
                );
                Ok(output)
            }
            Err(error) => {
                warn!(
                    event_name = "agent.function.failed",
                    function = name,
                    error = %error,
                    "registered function failed"
                );
                Err(error)
            }
        }
    }

    pub async fn probe_backend(&self) -> Result<(), ToolError> {
        self.backend.probe().await
    }

    /// Runs an `Ask Func[name]: argument` line and renders the transcript reply.
    pub async fn handle_call_line(&self, line: &str) -> Result<String, ToolError> {
        let call = FuncCall::parse(line)?;
        let output = self.invoke(&call.name, &call.argument).await?;
        Ok(render_result(&call.name, &output))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use revrec_core::config::BackendConfig;

    use super::AgentRuntime;
    use crate::backend::Method;
    use crate::errors::ToolError;
    use crate::functions::default_registry;
    use crate::prompt::BASE_PROMPT;
    use crate::testing::RecordingBackend;

    fn runtime(backend: RecordingBackend) -> AgentRuntime {
        AgentRuntime::new(default_registry().expect("registry"), Arc::new(backend))
    }

    #[tokio::test]
    async fn handle_call_line_renders_transcript_reply() {
        let runtime = runtime(RecordingBackend::default().respond(
            Method::Post,
            "/customers",
            201,
            "Meta has ID 4",
        ));

        let reply =
            runtime.handle_call_line("Ask Func[addcustomer]: Meta").await.expect("call succeeds");
        assert_eq!(reply, "Func[addcustomer] says: Meta has ID 4");
    }

    #[tokio::test]
    async fn handle_call_line_rejects_free_text() {
        let runtime = runtime(RecordingBackend::default());

        let result = runtime.handle_call_line("Add a customer named Meta").await;
        assert!(matches!(result, Err(ToolError::MalformedCall(_))));
    }

    #[tokio::test]
    async fn invoke_unknown_function_fails() {
        let runtime = runtime(RecordingBackend::default());

        let result = runtime.invoke("deletecustomer", "{}").await;
        assert!(matches!(result, Err(ToolError::UnknownFunction(_))));
    }

    #[test]
    fn metadata_lists_prompt_shots_and_functions() {
        let runtime = runtime(RecordingBackend::default());
        let metadata = runtime.metadata();

        assert_eq!(metadata.base_prompt, BASE_PROMPT);
        assert!(metadata.few_shots.len() >= 3);
        assert!(metadata.few_shots[0].starts_with("Q: Add a customer named Meta"));
        assert_eq!(metadata.funcs.len(), 12);
        assert_eq!(metadata.funcs[0].name, "addcustomer");
        assert_eq!(metadata.funcs[0].description, "Add a customer to the database.");
    }

    #[test]
    fn from_config_rejects_unusable_base_url() {
        let result = AgentRuntime::from_config(&BackendConfig {
            base_url: "mailto:finance@example.com".to_string(),
            timeout_secs: 5,
        });
        assert!(matches!(result, Err(ToolError::InvalidBaseUrl(_))));
    }
}

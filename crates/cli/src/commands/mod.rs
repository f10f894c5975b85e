pub mod call;
pub mod config;
pub mod doctor;
pub mod funcs;
pub mod prompt;

use revrec_agent::ToolError;
use revrec_core::config::{AppConfig, LogFormat};
use serde::Serialize;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn from_tool_error(command: &str, error: &ToolError) -> Self {
        let (error_class, exit_code) = match error {
            ToolError::InvalidArgument { .. } => ("invalid_argument", 4),
            ToolError::UnknownFunction(_) => ("unknown_function", 4),
            ToolError::MalformedCall(_) => ("malformed_call", 4),
            ToolError::DuplicateFunction(_) | ToolError::InvalidBaseUrl(_) => ("runtime_init", 3),
            ToolError::Transport(_) => ("backend_transport", 5),
            ToolError::Status { .. } => ("backend_status", 5),
            ToolError::Decode(_) => ("backend_decode", 5),
        };
        Self::failure(command, error_class, error.to_string(), exit_code)
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Logs go to stderr so stdout stays a single parseable outcome.
pub(crate) fn init_logging(config: &AppConfig) {
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

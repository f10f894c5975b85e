use revrec_core::ApplicationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid argument for `{function}`: {message}")]
    InvalidArgument { function: &'static str, message: String },
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    #[error("function `{0}` is already registered")]
    DuplicateFunction(String),
    #[error("malformed function call `{0}` (expected `Ask Func[name]: argument`)")]
    MalformedCall(String),
    #[error("invalid backend base url `{0}`")]
    InvalidBaseUrl(String),
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("backend returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ToolError {
    pub fn invalid_argument(function: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument { function, message: message.into() }
    }
}

impl From<ToolError> for ApplicationError {
    fn from(value: ToolError) -> Self {
        let message = value.to_string();
        match value {
            ToolError::InvalidArgument { .. } | ToolError::MalformedCall(_) => {
                Self::InvalidArgument(message)
            }
            ToolError::UnknownFunction(_) => Self::NotFound(message),
            ToolError::DuplicateFunction(_) | ToolError::InvalidBaseUrl(_) => {
                Self::Configuration(message)
            }
            ToolError::Transport(_) | ToolError::Status { .. } | ToolError::Decode(_) => {
                Self::Backend(message)
            }
        }
    }
}

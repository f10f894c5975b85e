//! Callback surface consumed by the agent framework.
//!
//! - `GET /` returns the agent metadata (base prompt, few-shots, functions)
//! - `POST /{func}` invokes one registered function with the message text
//!
//! Function failures are not retried or softened; they are mapped to an HTTP
//! status and relayed to the framework.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use revrec_agent::{AgentMetadata, AgentRuntime};
use revrec_core::{ApplicationError, InterfaceError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Clone)]
pub struct CallbackState {
    runtime: Arc<AgentRuntime>,
    next_call: Arc<AtomicU64>,
}

impl CallbackState {
    pub fn new(runtime: Arc<AgentRuntime>) -> Self {
        Self { runtime, next_call: Arc::new(AtomicU64::new(1)) }
    }

    fn correlation_id(&self) -> String {
        format!("call-{}", self.next_call.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentQuery {
    pub message: Message,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub message: Message,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
    pub correlation_id: String,
}

pub struct CallbackError(InterfaceError);

impl IntoResponse for CallbackError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            InterfaceError::NotFound { .. } => StatusCode::NOT_FOUND,
            InterfaceError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.0.user_message().to_string(),
            detail: self.0.to_string(),
            correlation_id: self.0.correlation_id().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(runtime: Arc<AgentRuntime>) -> Router {
    Router::new()
        .route("/", get(agent_metadata))
        .route("/{func}", post(invoke_function))
        .with_state(CallbackState::new(runtime))
}

async fn agent_metadata(State(state): State<CallbackState>) -> Json<AgentMetadata> {
    Json(state.runtime.metadata())
}

async fn invoke_function(
    State(state): State<CallbackState>,
    Path(func): Path<String>,
    Json(query): Json<AgentQuery>,
) -> Result<Json<AgentResponse>, CallbackError> {
    let correlation_id = state.correlation_id();
    info!(
        event_name = "server.callback.received",
        correlation_id = %correlation_id,
        function = %func,
        "function callback received"
    );

    match state.runtime.invoke(&func, &query.message.text).await {
        Ok(text) => Ok(Json(AgentResponse { message: Message { text } })),
        Err(error) => {
            let interface = ApplicationError::from(error).into_interface(correlation_id.clone());
            warn!(
                event_name = "server.callback.failed",
                correlation_id = %correlation_id,
                function = %func,
                error = %interface,
                "function callback failed"
            );
            Err(CallbackError(interface))
        }
    }
}

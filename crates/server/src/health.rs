use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use revrec_agent::AgentRuntime;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    runtime: Arc<AgentRuntime>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub backend: HealthCheck,
}

pub fn router(runtime: Arc<AgentRuntime>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { runtime })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let backend = backend_check(&state.runtime).await;
    let ready = backend.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: format!("{} functions registered", state.runtime.registry().len()),
        },
        backend,
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

async fn backend_check(runtime: &AgentRuntime) -> HealthCheck {
    match runtime.probe_backend().await {
        Ok(()) => HealthCheck { status: "ready", detail: "backend answered".to_string() },
        Err(error) => {
            HealthCheck { status: "degraded", detail: format!("backend unreachable: {error}") }
        }
    }
}

//! In-memory [`Backend`] that records requests and replays canned responses.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{Backend, BackendRequest, BackendResponse, Method};
use crate::errors::ToolError;

#[derive(Default)]
pub struct RecordingBackend {
    responses: Mutex<HashMap<(Method, String), BackendResponse>>,
    requests: Mutex<Vec<BackendRequest>>,
    probes: AtomicUsize,
    down: bool,
}

impl RecordingBackend {
    pub fn respond(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(
                (method, path.to_string()),
                BackendResponse { status, body: body.to_string() },
            );
        }
        self
    }

    /// Makes `probe` fail as if the backend refused connections.
    pub fn unreachable(mut self) -> Self {
        self.down = true;
        self
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<BackendRequest> {
        self.requests.lock().map(|requests| requests.clone()).unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<BackendRequest> {
        self.requests().pop()
    }
}

#[async_trait]
impl Backend for RecordingBackend {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse, ToolError> {
        let key = (request.method, request.path());
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let response =
            self.responses.lock().ok().and_then(|responses| responses.get(&key).cloned());
        Ok(response.unwrap_or_else(|| BackendResponse {
            status: 404,
            body: format!("no canned response for {} {}", key.0, key.1),
        }))
    }

    async fn probe(&self) -> Result<(), ToolError> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        if self.down {
            return Err(ToolError::Status {
                status: 503,
                body: "recording backend is unreachable".to_string(),
            });
        }
        Ok(())
    }
}

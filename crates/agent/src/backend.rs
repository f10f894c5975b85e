//! HTTP access to the revenue backend.
//!
//! Every registered function issues exactly one request through [`Backend`].
//! Requests carry path segments rather than a rendered path so the HTTP
//! implementation can percent-encode user-supplied values such as customer
//! names.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use revrec_core::config::BackendConfig;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::ToolError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackendRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub body: Option<Value>,
}

impl BackendRequest {
    pub fn get(segments: &[&str]) -> Self {
        Self { method: Method::Get, segments: to_segments(segments), body: None }
    }

    pub fn post(segments: &[&str], body: Value) -> Self {
        Self { method: Method::Post, segments: to_segments(segments), body: Some(body) }
    }

    pub fn delete(segments: &[&str]) -> Self {
        Self { method: Method::Delete, segments: to_segments(segments), body: None }
    }

    /// Unencoded path, used for logging and request matching in tests.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

fn to_segments(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|segment| segment.to_string()).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendResponse {
    pub status: u16,
    pub body: String,
}

impl BackendResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes a JSON body, treating non-2xx statuses as failures.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ToolError> {
        if !self.is_success() {
            return Err(ToolError::Status { status: self.status, body: self.body.clone() });
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[async_trait]
pub trait Backend: Send + Sync {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse, ToolError>;

    /// Checks that the backend answers HTTP at all; any status counts.
    async fn probe(&self) -> Result<(), ToolError>;
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn from_config(config: &BackendConfig) -> Result<Self, ToolError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|_| ToolError::InvalidBaseUrl(config.base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(ToolError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self { client, base_url })
    }

    pub fn url_for(&self, segments: &[String]) -> Result<Url, ToolError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ToolError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse, ToolError> {
        let url = self.url_for(&request.segments)?;
        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(
            event_name = "agent.backend.response",
            method = %request.method,
            path = %request.path(),
            status,
            body_len = body.len(),
            "backend request completed"
        );

        Ok(BackendResponse { status, body })
    }

    async fn probe(&self) -> Result<(), ToolError> {
        self.client.get(self.base_url.clone()).send().await?;
        Ok(())
    }
}

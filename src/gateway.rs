//! Typed HTTP client for the recruiter RAG backend
//!
//! One method per backend capability, each scoped by the caller's session id.
//! Every request carries the configured X-API-Key header and a 60 second
//! timeout. One attempt per call, no retries; the health check is the only
//! operation that swallows failures.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::error::GatewayError;

/// Request budget shared by every backend call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Generic `{status, message}` envelope returned by ingest and wipe
#[derive(Debug, Clone, Deserialize)]
pub struct StandardResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct IngestTextRequest<'a> {
    text: &'a str,
    #[serde(rename = "sessionId")]
    session_id: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
    #[serde(rename = "sessionId")]
    session_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
struct WipeRequest<'a> {
    #[serde(rename = "sessionId")]
    session_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "isEmpty")]
    pub is_empty: bool,
}

/// Shape of the backend's structured error body
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

pub struct BackendGateway {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl BackendGateway {
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: config.backend.url.trim_end_matches('/').to_string(),
            api_key: config.backend.api_key.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);

        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(api_key) = &self.api_key {
            builder = builder.header("X-API-Key", api_key);
        }
        builder
    }

    /// GET /health. Collapses every failure to `false`; never errors.
    pub async fn check_health(&self) -> bool {
        match self.request(Method::GET, "/health").send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!("health check failed: {err}");
                false
            }
        }
    }

    /// POST /ingest (multipart: file, sessionId)
    pub async fn ingest_file(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        mime: &str,
        session_id: &str,
    ) -> Result<StandardResponse, GatewayError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = Form::new()
            .part("file", part)
            .text("sessionId", session_id.to_string());

        let response = self
            .request(Method::POST, "/ingest")
            .multipart(form)
            .send()
            .await?;
        read_json(response).await
    }

    /// POST /ingest/text (JSON: text, sessionId)
    pub async fn ingest_text(
        &self,
        text: &str,
        session_id: &str,
    ) -> Result<StandardResponse, GatewayError> {
        let response = self
            .request(Method::POST, "/ingest/text")
            .json(&IngestTextRequest { text, session_id })
            .send()
            .await?;
        read_json(response).await
    }

    /// POST /chat (JSON: question, sessionId)
    pub async fn chat(
        &self,
        question: &str,
        session_id: &str,
    ) -> Result<ChatResponse, GatewayError> {
        let response = self
            .request(Method::POST, "/chat")
            .json(&ChatRequest {
                question,
                session_id,
            })
            .send()
            .await?;
        read_json(response).await
    }

    /// POST /wipe (JSON: sessionId)
    pub async fn wipe_session(&self, session_id: &str) -> Result<StandardResponse, GatewayError> {
        let response = self
            .request(Method::POST, "/wipe")
            .json(&WipeRequest { session_id })
            .send()
            .await?;
        read_json(response).await
    }

    /// GET /status?sessionId=...
    pub async fn session_status(&self, session_id: &str) -> Result<StatusResponse, GatewayError> {
        let response = self
            .request(Method::GET, "/status")
            .query(&[("sessionId", session_id)])
            .send()
            .await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::Rejected {
            status,
            detail: extract_detail(&body),
        });
    }

    response.json::<T>().await.map_err(GatewayError::from)
}

/// Pulls the structured `{"detail": ...}` string out of an error body,
/// falling back to the raw body text.
fn extract_detail(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.detail;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Unknown error".to_string()
    } else {
        trimmed.to_string()
    }
}

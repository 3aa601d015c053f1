//! HTTP adapter for the converter server.
//!
//! Posts the JSON bodies from `converter_types::api` and unwraps the
//! `{ success, ... }` envelope. Every failure becomes a [`BackendError`];
//! the UI decides what text to show for it.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use converter_core::ports::BackendPort;
use converter_types::{
    api::{ChatRequest, ChatResponse, ConvertRequest, ConvertResponse, HealthResponse},
    config::ClientConfig,
    error::BackendError,
};

/// Talks to `/convert`, `/chat` and `/health` under the configured prefix.
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, BackendError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| BackendError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        read_envelope(response).await
    }
}

/// Error statuses still carry a JSON envelope, so the body is parsed
/// regardless of `response.ok()`.
async fn read_envelope<R: DeserializeOwned>(response: Response) -> Result<R, BackendError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| BackendError::Network(e.to_string()))?;
    decode_envelope(status, &text)
}

pub(crate) fn decode_envelope<R: DeserializeOwned>(status: u16, text: &str) -> Result<R, BackendError> {
    serde_json::from_str(text).map_err(|e| {
        log::warn!("Unreadable response (HTTP {}): {}", status, e);
        BackendError::Network(format!("HTTP {}", status))
    })
}

pub fn interpret_convert(resp: ConvertResponse) -> Result<String, BackendError> {
    match resp {
        ConvertResponse {
            success: true,
            converted_code: Some(code),
            ..
        } => Ok(code),
        ConvertResponse { error, .. } => Err(BackendError::Rejected(
            error.unwrap_or_else(|| "Conversion returned no code".to_string()),
        )),
    }
}

pub fn interpret_chat(resp: ChatResponse) -> Result<String, BackendError> {
    match resp {
        ChatResponse {
            success: true,
            response: Some(text),
            ..
        } => Ok(text),
        ChatResponse { error, .. } => Err(BackendError::Rejected(
            error.unwrap_or_else(|| "Chat returned no response".to_string()),
        )),
    }
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn convert(&self, req: ConvertRequest) -> Result<String, BackendError> {
        let resp: ConvertResponse = self.post("convert", &req).await?;
        interpret_convert(resp)
    }

    async fn chat(&self, req: ChatRequest) -> Result<String, BackendError> {
        let resp: ChatResponse = self.post("chat", &req).await?;
        interpret_chat(resp)
    }

    async fn health(&self) -> Result<HealthResponse, BackendError> {
        let url = self.config.endpoint("health");
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(BackendError::Network(format!("HTTP {}", response.status())));
        }
        response
            .json()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))
    }
}

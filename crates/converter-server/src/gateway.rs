//! OpenAI-compatible LLM gateway client.
//!
//! Works with Groq, OpenAI, DeepSeek and any provider using the
//! OpenAI chat completions API format. One attempt per call: no retry,
//! no backoff, and no timeout beyond what the transport reports.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use converter_core::ports::{CompletionRequest, GatewayPort};
use converter_types::{
    ConverterError, Result,
    config::{API_KEY_VAR, GatewayConfig},
    message::{Message, Role},
};

pub struct OpenAiCompatGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl OpenAiCompatGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn build_request_body(&self, req: &CompletionRequest) -> Value {
        let mut messages = vec![message_to_json(&Message::system(req.system_prompt.as_str()))];
        messages.extend(req.messages.iter().map(message_to_json));

        json!({
            "model": self.config.model,
            "messages": messages,
            "max_tokens": req.max_tokens,
            "temperature": req.temperature,
        })
    }
}

#[async_trait]
impl GatewayPort for OpenAiCompatGateway {
    async fn complete(&self, req: CompletionRequest) -> Result<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(ConverterError::missing_credential(API_KEY_VAR));
        };

        let url = self.config.completions_url();
        let body = self.build_request_body(&req);
        tracing::debug!(model = %self.config.model, turns = req.messages.len(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ConverterError::Transport {
                detail: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ConverterError::Transport {
            detail: e.to_string(),
        })?;

        parse_completion(status, &text)
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ─── Serialization helpers ───────────────────────────────────

fn message_to_json(msg: &Message) -> Value {
    let role = match msg.role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    };

    json!({
        "role": role,
        "content": msg.content,
    })
}

/// Interpret a provider response. Non-success statuses become `Upstream`
/// errors carrying the provider's `error.message` when it sent one.
pub fn parse_completion(status: u16, body: &str) -> Result<String> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("LLM gateway returned HTTP {}", status));
        return Err(ConverterError::Upstream { status, message });
    }

    let data: ApiResponse = serde_json::from_str(body).map_err(|e| ConverterError::Upstream {
        status,
        message: format!("Malformed response from LLM gateway: {}", e),
    })?;

    data.choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| ConverterError::Upstream {
            status,
            message: "LLM gateway returned no choices".to_string(),
        })
}

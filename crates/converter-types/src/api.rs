//! JSON bodies exchanged between the browser client and the server.
//!
//! Request fields are optional so that a missing field becomes a
//! validation error carried in the response envelope instead of a
//! deserialization failure.

use serde::{Deserialize, Serialize};

use crate::message::{ChatHistory, ChatMessage};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_language: Option<String>,
}

impl ConvertRequest {
    pub fn new(code: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            from_language: Some(from.into()),
            to_language: Some(to.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConvertResponse {
    pub fn ok(converted_code: impl Into<String>) -> Self {
        Self {
            success: true,
            converted_code: Some(converted_code.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            converted_code: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub current_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(default)]
    pub chat_history: ChatHistory,
}

impl ChatRequest {
    pub fn new(
        message: impl Into<String>,
        current_code: impl Into<String>,
        current_language: impl Into<String>,
        target_language: impl Into<String>,
        chat_history: Vec<ChatMessage>,
    ) -> Self {
        Self {
            message: message.into(),
            current_code: current_code.into(),
            current_language: Some(current_language.into()),
            target_language: Some(target_language.into()),
            chat_history: chat_history.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: Some(response.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

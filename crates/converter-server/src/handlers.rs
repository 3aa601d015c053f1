//! Request handlers.
//!
//! Every failure is answered with the `{ success: false, error }` envelope;
//! validation problems map to 400, everything else to 500.

use std::sync::Arc;

use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};

use converter_core::{chat::ChatOrchestrator, conversion::ConversionService, ports::GatewayPort};
use converter_types::{
    ConverterError,
    api::{ChatRequest, ChatResponse, ConvertRequest, ConvertResponse, HealthResponse},
    config::GatewayConfig,
    error::{ChatError, ErrorKind},
    language::LanguageTag,
    session::{ConversionRequest, SessionState},
};

pub const MISSING_CONVERT_PARAMS: &str =
    "Missing required parameters: code, fromLanguage, toLanguage";
pub const MISSING_CHAT_PARAMS: &str =
    "Missing required parameters: message, currentLanguage, targetLanguage";

/// Shared, read-only handler state. Holds no per-request data.
pub struct ApiState {
    pub conversion: ConversionService,
    pub chat: ChatOrchestrator,
}

impl ApiState {
    pub fn new(gateway: Arc<dyn GatewayPort>, config: &GatewayConfig) -> Self {
        Self {
            conversion: ConversionService::new(gateway.clone(), config.conversion),
            chat: ChatOrchestrator::new(gateway, config.chat),
        }
    }
}

pub type SharedState = Arc<ApiState>;

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Configuration | ErrorKind::Upstream | ErrorKind::Transport => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_convert(payload: Result<Json<ConvertRequest>, JsonRejection>) -> converter_types::Result<ConversionRequest> {
    let Json(body) = payload.map_err(|e| ConverterError::Validation(e.body_text()))?;
    let (Some(code), Some(from), Some(to)) = (
        non_empty(body.code),
        non_empty(body.from_language),
        non_empty(body.to_language),
    ) else {
        return Err(ConverterError::Validation(MISSING_CONVERT_PARAMS.to_string()));
    };
    ConversionRequest::new(code, from.parse::<LanguageTag>()?, to.parse::<LanguageTag>()?)
}

/// Translate code between languages
pub async fn convert(
    State(state): State<SharedState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> (StatusCode, Json<ConvertResponse>) {
    let req = match parse_convert(payload) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!("Rejected conversion request: {}", e);
            return (status_for(e.kind()), Json(ConvertResponse::failed(e.to_string())));
        }
    };

    tracing::debug!(from = %req.from_language, to = %req.to_language, "Converting code");

    match state.conversion.convert(&req).await {
        Ok(code) => (StatusCode::OK, Json(ConvertResponse::ok(code))),
        Err(e) => {
            if let ConverterError::Transport { detail } = &e {
                tracing::error!("Conversion error: gateway unreachable: {}", detail);
            } else {
                tracing::error!("Conversion error: {}", e);
            }
            (status_for(e.kind()), Json(ConvertResponse::failed(e.to_string())))
        }
    }
}

fn parse_chat(payload: Result<Json<ChatRequest>, JsonRejection>) -> converter_types::Result<(SessionState, String)> {
    let Json(body) = payload.map_err(|e| ConverterError::Validation(e.body_text()))?;
    let (Some(current), Some(target)) = (
        non_empty(body.current_language),
        non_empty(body.target_language),
    ) else {
        return Err(ConverterError::Validation(MISSING_CHAT_PARAMS.to_string()));
    };
    let session = SessionState::restore(
        body.current_code,
        current.parse::<LanguageTag>()?,
        target.parse::<LanguageTag>()?,
        body.chat_history,
    );
    Ok((session, body.message))
}

/// Envelope text for a failed turn. Gateway failures never expose the
/// provider's message; it only reaches the log.
fn chat_failure_text(e: &ChatError) -> String {
    match e {
        ChatError::EmptyMessage => e.to_string(),
        ChatError::Gateway(_) => e.fallback_text().to_string(),
    }
}

/// Answer a question about the current code
pub async fn chat(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<ChatResponse>) {
    let (session, message) = match parse_chat(payload) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Rejected chat request: {}", e);
            return (status_for(e.kind()), Json(ChatResponse::failed(e.to_string())));
        }
    };

    match state.chat.ask(&session, &message).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(ChatResponse::ok(reply.text().unwrap_or_default())),
        ),
        Err(e) => {
            tracing::error!("Chat error: {:?}", e);
            (status_for(e.kind()), Json(ChatResponse::failed(chat_failure_text(&e))))
        }
    }
}

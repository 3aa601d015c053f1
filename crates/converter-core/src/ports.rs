//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `converter-core` (pure Rust).
//! The gateway implementation lives in `converter-server`, the backend
//! client in `converter-platform` and the editor widget in `converter-ui`.

use async_trait::async_trait;
use converter_types::{
    Result,
    api::{ChatRequest, ConvertRequest, HealthResponse},
    error::BackendError,
    language::SyntaxMode,
    message::Message,
};

// ─── LLM Gateway Port ────────────────────────────────────────

/// One completion call: a system instruction plus role-tagged turns.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Server-side access to the external LLM. A single attempt per call,
/// no retry.
#[async_trait]
pub trait GatewayPort: Send + Sync {
    /// Returns the completion text, or a `Configuration`, `Upstream` or
    /// `Transport` error.
    async fn complete(&self, req: CompletionRequest) -> Result<String>;
}

// ─── Backend Port ────────────────────────────────────────────

/// Browser-side access to the converter server.
#[async_trait(?Send)]
pub trait BackendPort {
    /// `POST /convert`, yields the converted code
    async fn convert(&self, req: ConvertRequest) -> std::result::Result<String, BackendError>;

    /// `POST /chat`, yields the assistant reply
    async fn chat(&self, req: ChatRequest) -> std::result::Result<String, BackendError>;

    /// `GET /health`
    async fn health(&self) -> std::result::Result<HealthResponse, BackendError>;
}

// ─── Editor Widget Port ──────────────────────────────────────

/// The externally owned text buffer.
pub trait EditorWidget {
    /// Current document text
    fn text(&self) -> String;

    /// Replace the whole document in a single edit
    fn replace_all(&mut self, text: &str);

    fn mode(&self) -> SyntaxMode;
}

/// Creates and destroys editor widgets. Highlighting mode is fixed at
/// creation, so a language change means a new widget.
pub trait EditorHost {
    type Widget: EditorWidget;

    fn create(&mut self, doc: &str, mode: SyntaxMode) -> Self::Widget;

    fn destroy(&mut self, widget: Self::Widget);
}

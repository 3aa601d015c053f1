use thiserror::Error;

/// Coarse classification used to pick an HTTP status and a log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Upstream,
    Transport,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConverterError {
    /// Malformed or missing request fields.
    #[error("{0}")]
    Validation(String),

    /// The server is missing its gateway credential.
    #[error("{0}")]
    Configuration(String),

    /// The gateway answered with a non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The gateway could not be reached. `detail` is for logs only.
    #[error("Could not reach the LLM gateway. Please check the connection and try again.")]
    Transport { detail: String },
}

impl ConverterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConverterError::Validation(_) => ErrorKind::Validation,
            ConverterError::Configuration(_) => ErrorKind::Configuration,
            ConverterError::Upstream { .. } => ErrorKind::Upstream,
            ConverterError::Transport { .. } => ErrorKind::Transport,
        }
    }

    pub fn missing_credential(var: &str) -> Self {
        ConverterError::Configuration(format!(
            "LLM gateway API key not configured. Set {} to enable conversion and chat.",
            var
        ))
    }
}

pub const CHAT_ERROR_FALLBACK: &str = "Sorry, I encountered an error. Please try again.";
pub const CHAT_OFFLINE_FALLBACK: &str = "Sorry, I'm having trouble connecting. Please try again.";

/// Failure of a single assistant turn.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatError {
    #[error("Message must not be empty")]
    EmptyMessage,

    #[error(transparent)]
    Gateway(#[from] ConverterError),
}

impl ChatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::EmptyMessage => ErrorKind::Validation,
            ChatError::Gateway(e) => e.kind(),
        }
    }

    /// Text safe to show in the chat stream in place of a reply.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            ChatError::Gateway(ConverterError::Transport { .. }) => CHAT_OFFLINE_FALLBACK,
            _ => CHAT_ERROR_FALLBACK,
        }
    }
}

/// Failure talking to the converter backend from the browser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    /// The backend answered with `success: false`.
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl BackendError {
    pub fn chat_fallback(&self) -> &'static str {
        match self {
            BackendError::Rejected(_) => CHAT_ERROR_FALLBACK,
            BackendError::Network(_) => CHAT_OFFLINE_FALLBACK,
        }
    }

    /// Message for the blocking conversion alert.
    pub fn conversion_alert(&self) -> String {
        match self {
            BackendError::Rejected(message) => format!("Conversion failed: {}", message),
            BackendError::Network(_) => {
                "Failed to convert code. Please check your connection and try again.".to_string()
            }
        }
    }
}

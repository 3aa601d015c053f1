use serde::{Deserialize, Serialize};

use crate::language::LanguageTag;

/// Role in a gateway conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged turn sent to the LLM gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
        }
    }
}

/// Number of characters of converted code shown in a conversion preview.
pub const PREVIEW_CHARS: usize = 100;

/// An entry in the session's chat stream.
///
/// The wire shape matches what the browser client posts to `/chat`:
/// `{"type": "user", "content": ..., "timestamp": ...}` and
/// `{"type": "conversion", "from": ..., "to": ..., "originalCode": ..., ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChatMessage {
    #[serde(rename = "user")]
    User {
        content: String,
        #[serde(default)]
        timestamp: String,
    },
    #[serde(rename = "assistant")]
    Assistant {
        content: String,
        #[serde(default)]
        timestamp: String,
    },
    #[serde(rename = "conversion", rename_all = "camelCase")]
    ConversionSummary {
        from: LanguageTag,
        to: LanguageTag,
        original_code: String,
        converted_code: String,
        #[serde(default)]
        timestamp: String,
    },
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage::User {
            content: text.into(),
            timestamp: now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        ChatMessage::Assistant {
            content: text.into(),
            timestamp: now(),
        }
    }

    pub fn conversion(
        from: LanguageTag,
        to: LanguageTag,
        original_code: impl Into<String>,
        converted_code: impl Into<String>,
    ) -> Self {
        ChatMessage::ConversionSummary {
            from,
            to,
            original_code: original_code.into(),
            converted_code: converted_code.into(),
            timestamp: now(),
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            ChatMessage::User { timestamp, .. }
            | ChatMessage::Assistant { timestamp, .. }
            | ChatMessage::ConversionSummary { timestamp, .. } => timestamp,
        }
    }

    /// Conversational text, `None` for conversion summaries.
    pub fn text(&self) -> Option<&str> {
        match self {
            ChatMessage::User { content, .. } | ChatMessage::Assistant { content, .. } => {
                Some(content)
            }
            ChatMessage::ConversionSummary { .. } => None,
        }
    }

    /// Map to a gateway turn. Conversion summaries are not turns.
    pub fn to_gateway_message(&self) -> Option<Message> {
        match self {
            ChatMessage::User { content, .. } => Some(Message::user(content.clone())),
            ChatMessage::Assistant { content, .. } => Some(Message::assistant(content.clone())),
            ChatMessage::ConversionSummary { .. } => None,
        }
    }

    /// Short preview of a conversion's output, e.g. for the chat stream.
    pub fn conversion_preview(&self) -> Option<String> {
        match self {
            ChatMessage::ConversionSummary { converted_code, .. } => {
                let head: String = converted_code.chars().take(PREVIEW_CHARS).collect();
                Some(format!("{}...", head))
            }
            _ => None,
        }
    }
}

/// Ordered chat stream. Storage is unbounded; only a suffix is ever
/// forwarded as context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatHistory(Vec<ChatMessage>);

impl ChatHistory {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.0.push(message);
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[ChatMessage] {
        let start = self.0.len().saturating_sub(n);
        &self.0[start..]
    }

    /// Gateway turns for the last `n` entries. Conversion summaries inside
    /// the window are dropped, so the result may be shorter than `n`.
    pub fn context_window(&self, n: usize) -> Vec<Message> {
        self.recent(n)
            .iter()
            .filter_map(ChatMessage::to_gateway_message)
            .collect()
    }
}

impl From<Vec<ChatMessage>> for ChatHistory {
    fn from(entries: Vec<ChatMessage>) -> Self {
        Self(entries)
    }
}

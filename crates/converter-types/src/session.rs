use serde::{Deserialize, Serialize};

use crate::error::ConverterError;
use crate::language::LanguageTag;
use crate::message::{ChatHistory, ChatMessage};

pub const DEFAULT_CODE: &str = "// Welcome to Code Converter IDE\n\
// Write your code here and convert it to any language!\n\
\n\
function hello() {\n  console.log(\"Hello, World!\");\n}";

/// The client-held document for one session.
///
/// Fields are private: every transition goes through one of the named
/// mutation methods below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    code: String,
    current_language: LanguageTag,
    target_language: LanguageTag,
    history: ChatHistory,
    is_converting: bool,
    is_awaiting_reply: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::restore(
            DEFAULT_CODE,
            LanguageTag::JavaScript,
            LanguageTag::Python,
            ChatHistory::new(),
        )
    }

    /// Rebuild a state from values carried by a request.
    pub fn restore(
        code: impl Into<String>,
        current_language: LanguageTag,
        target_language: LanguageTag,
        history: ChatHistory,
    ) -> Self {
        Self {
            code: code.into(),
            current_language,
            target_language,
            history,
            is_converting: false,
            is_awaiting_reply: false,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn current_language(&self) -> LanguageTag {
        self.current_language
    }

    pub fn target_language(&self) -> LanguageTag {
        self.target_language
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn is_converting(&self) -> bool {
        self.is_converting
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.is_awaiting_reply
    }

    /// Whether the convert control should accept a click.
    pub fn can_convert(&self) -> bool {
        !self.is_converting && self.current_language != self.target_language
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn set_current_language(&mut self, language: LanguageTag) {
        self.current_language = language;
    }

    pub fn set_target_language(&mut self, language: LanguageTag) {
        self.target_language = language;
    }

    pub fn append_history(&mut self, message: ChatMessage) {
        self.history.push(message);
    }

    pub fn set_converting(&mut self, converting: bool) {
        self.is_converting = converting;
    }

    pub fn set_awaiting_reply(&mut self, awaiting: bool) {
        self.is_awaiting_reply = awaiting;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated translation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source_code: String,
    pub from_language: LanguageTag,
    pub to_language: LanguageTag,
}

impl ConversionRequest {
    pub fn new(
        source_code: impl Into<String>,
        from_language: LanguageTag,
        to_language: LanguageTag,
    ) -> crate::Result<Self> {
        let source_code = source_code.into();
        if source_code.is_empty() {
            return Err(ConverterError::Validation(
                "Missing required parameters: code".to_string(),
            ));
        }
        Ok(Self {
            source_code,
            from_language,
            to_language,
        })
    }

    /// Build the request for the session's current document.
    pub fn from_session(state: &SessionState) -> crate::Result<Self> {
        Self::new(state.code(), state.current_language(), state.target_language())
    }

    pub fn is_identity(&self) -> bool {
        self.from_language == self.to_language
    }
}

use crate::error::BackendError;
use crate::language::LanguageTag;

/// Events produced by in-flight backend calls.
/// The UI drains these each frame and applies them to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A `/convert` call resolved. Carries the inputs it was issued with so
    /// the summary reflects what was actually converted.
    ConversionFinished {
        from: LanguageTag,
        to: LanguageTag,
        original_code: String,
        outcome: Result<String, BackendError>,
    },

    /// A `/chat` call resolved
    ChatReplied { outcome: Result<String, BackendError> },

    /// Result of the startup `/health` probe
    HealthChecked { online: bool },
}

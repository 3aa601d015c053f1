//! UI-level state that drives rendering.
//!
//! Wraps the session with the bits only the UI cares about (chat input,
//! pending alert, backend reachability) and folds bus events into it
//! each frame.

use converter_core::workflow::{self, ConvertStart};
use converter_types::{
    api::ChatRequest,
    event::SessionEvent,
    session::{ConversionRequest, SessionState},
};

use crate::quick_actions::QuickAction;

pub const STATUS_CONNECTING: &str = "Connecting...";
pub const STATUS_ONLINE: &str = "Ready to help";
pub const STATUS_OFFLINE: &str = "Assistant offline";

/// State visible to UI panels
pub struct UiState {
    pub session: SessionState,
    /// Chat input field content
    pub chat_input: String,
    /// Blocking message shown until dismissed
    pub alert: Option<String>,
    /// Result of the last health probe, `None` until it resolves
    pub backend_online: Option<bool>,
}

impl UiState {
    pub fn new() -> Self {
        Self::with_session(SessionState::new())
    }

    pub fn with_session(session: SessionState) -> Self {
        Self {
            session,
            chat_input: String::new(),
            alert: None,
            backend_online: None,
        }
    }

    /// Apply events from the bus. Returns `true` when the document was
    /// replaced and the editor needs a downward sync.
    pub fn process_events(&mut self, events: Vec<SessionEvent>) -> bool {
        let mut code_replaced = false;
        for event in events {
            let applied = workflow::apply_event(&mut self.session, event);
            code_replaced |= applied.code_replaced;
            if let Some(alert) = applied.alert {
                self.alert = Some(alert);
            }
            if let Some(online) = applied.online {
                self.backend_online = Some(online);
            }
        }
        code_replaced
    }

    /// Convert button pressed. Blank code raises the alert instead.
    pub fn request_conversion(&mut self) -> Option<ConversionRequest> {
        match workflow::begin_conversion(&mut self.session) {
            ConvertStart::Dispatch(req) => Some(req),
            ConvertStart::Alert(message) => {
                self.alert = Some(message);
                None
            }
            ConvertStart::Busy => None,
        }
    }

    /// Send the chat input. The field is cleared only when a request
    /// was actually produced.
    pub fn submit_chat(&mut self, history_sent: usize) -> Option<ChatRequest> {
        let req = workflow::begin_chat(&mut self.session, &self.chat_input, history_sent)?;
        self.chat_input.clear();
        Some(req)
    }

    pub fn can_send(&self) -> bool {
        !self.chat_input.trim().is_empty() && !self.session.is_awaiting_reply()
    }

    /// Fill the input with a canned prompt without sending it.
    pub fn apply_quick_action(&mut self, action: QuickAction) {
        self.chat_input = action.prompt(
            self.session.current_language(),
            self.session.target_language(),
        );
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn status_text(&self) -> &'static str {
        match self.backend_online {
            None => STATUS_CONNECTING,
            Some(true) => STATUS_ONLINE,
            Some(false) => STATUS_OFFLINE,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.session.is_converting() || self.session.is_awaiting_reply()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

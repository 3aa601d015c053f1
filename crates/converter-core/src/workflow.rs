//! Client-side session transitions around backend calls.
//!
//! `begin_*` validate and flip the busy flags, the async `dispatch_*`
//! functions perform the call and publish a [`SessionEvent`], and
//! [`apply_event`] folds the result back into the state. Nothing is
//! mutated until a result arrives, so a failed conversion leaves the
//! document untouched.

use converter_types::{
    api::{ChatRequest, ConvertRequest},
    error::BackendError,
    event::SessionEvent,
    message::ChatMessage,
    session::{ConversionRequest, SessionState},
};

use crate::event_bus::EventBus;
use crate::ports::BackendPort;

pub const EMPTY_CODE_ALERT: &str = "Please enter some code to convert";

/// What the convert control should do on click.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertStart {
    Dispatch(ConversionRequest),
    Alert(String),
    /// A conversion is already in flight.
    Busy,
}

/// What applying an event asks of the surrounding UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Applied {
    /// `code` was replaced by something other than the widget
    pub code_replaced: bool,
    /// Blocking message for the user
    pub alert: Option<String>,
    pub online: Option<bool>,
}

pub fn begin_conversion(state: &mut SessionState) -> ConvertStart {
    if state.is_converting() {
        return ConvertStart::Busy;
    }
    if state.code().trim().is_empty() {
        return ConvertStart::Alert(EMPTY_CODE_ALERT.to_string());
    }
    match ConversionRequest::from_session(state) {
        Ok(req) => {
            state.set_converting(true);
            ConvertStart::Dispatch(req)
        }
        Err(e) => ConvertStart::Alert(e.to_string()),
    }
}

/// Record the user's message and build the `/chat` body. The forwarded
/// history is the last `history_sent` entries from before this message.
/// Returns `None` for blank input or while a reply is pending.
pub fn begin_chat(
    state: &mut SessionState,
    text: &str,
    history_sent: usize,
) -> Option<ChatRequest> {
    let text = text.trim();
    if text.is_empty() || state.is_awaiting_reply() {
        return None;
    }

    let context = state.history().recent(history_sent).to_vec();
    state.append_history(ChatMessage::user(text));
    state.set_awaiting_reply(true);

    Some(ChatRequest::new(
        text,
        state.code(),
        state.current_language().id(),
        state.target_language().id(),
        context,
    ))
}

pub async fn dispatch_conversion(backend: &dyn BackendPort, bus: &EventBus, req: ConversionRequest) {
    let wire = ConvertRequest::new(
        req.source_code.clone(),
        req.from_language.id(),
        req.to_language.id(),
    );
    let outcome = backend.convert(wire).await;
    if let Err(e) = &outcome {
        log::error!("Conversion error: {}", e);
    }
    bus.emit(SessionEvent::ConversionFinished {
        from: req.from_language,
        to: req.to_language,
        original_code: req.source_code,
        outcome,
    });
}

pub async fn dispatch_chat(backend: &dyn BackendPort, bus: &EventBus, req: ChatRequest) {
    let outcome = backend.chat(req).await;
    if let Err(e) = &outcome {
        log::error!("Chat error: {}", e);
    }
    bus.emit(SessionEvent::ChatReplied { outcome });
}

pub async fn dispatch_health(backend: &dyn BackendPort, bus: &EventBus) {
    let online = match backend.health().await {
        Ok(health) => health.status == "OK",
        Err(e) => {
            log::warn!("Backend health check failed: {}", e);
            false
        }
    };
    bus.emit(SessionEvent::HealthChecked { online });
}

pub fn apply_event(state: &mut SessionState, event: SessionEvent) -> Applied {
    match event {
        SessionEvent::ConversionFinished {
            from,
            to,
            original_code,
            outcome,
        } => {
            state.set_converting(false);
            match outcome {
                Ok(converted) => {
                    state.set_code(converted.clone());
                    state.append_history(ChatMessage::conversion(from, to, original_code, converted));
                    Applied {
                        code_replaced: true,
                        ..Applied::default()
                    }
                }
                Err(e) => Applied {
                    alert: Some(e.conversion_alert()),
                    ..Applied::default()
                },
            }
        }
        SessionEvent::ChatReplied { outcome } => {
            let text = outcome.unwrap_or_else(|e: BackendError| e.chat_fallback().to_string());
            state.append_history(ChatMessage::assistant(text));
            state.set_awaiting_reply(false);
            Applied::default()
        }
        SessionEvent::HealthChecked { online } => Applied {
            online: Some(online),
            ..Applied::default()
        },
    }
}

//! Context-aware assistant turns.

use std::sync::Arc;

use converter_types::{
    config::SamplingParams,
    error::ChatError,
    message::{ChatMessage, Message},
    session::SessionState,
};

use crate::ports::{CompletionRequest, GatewayPort};
use crate::prompt::chat_system_prompt;

/// History entries considered as conversational context.
pub const CONTEXT_WINDOW: usize = 3;

pub struct ChatOrchestrator {
    gateway: Arc<dyn GatewayPort>,
    params: SamplingParams,
    window: usize,
}

impl ChatOrchestrator {
    pub fn new(gateway: Arc<dyn GatewayPort>, params: SamplingParams) -> Self {
        Self {
            gateway,
            params,
            window: CONTEXT_WINDOW,
        }
    }

    /// The turns forwarded for `user_text`: at most `window` prior entries
    /// (conversion summaries dropped) followed by the new message.
    pub fn build_messages(&self, state: &SessionState, user_text: &str) -> Vec<Message> {
        let mut messages = state.history().context_window(self.window);
        messages.push(Message::user(user_text));
        messages
    }

    /// Ask the assistant about the session. Does not touch the history;
    /// the caller appends the user message and the reply.
    pub async fn ask(
        &self,
        state: &SessionState,
        user_text: &str,
    ) -> Result<ChatMessage, ChatError> {
        if user_text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let req = CompletionRequest {
            system_prompt: chat_system_prompt(state),
            messages: self.build_messages(state, user_text),
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
        };

        match self.gateway.complete(req).await {
            Ok(reply) => Ok(ChatMessage::assistant(reply.trim())),
            Err(e) => {
                log::warn!("Chat turn failed ({:?}): {}", e.kind(), e);
                Err(ChatError::Gateway(e))
            }
        }
    }
}

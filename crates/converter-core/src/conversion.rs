//! Single-shot code translation.

use std::sync::Arc;

use converter_types::{Result, config::SamplingParams, message::Message, session::ConversionRequest};

use crate::ports::{CompletionRequest, GatewayPort};
use crate::prompt::{CONVERSION_SYSTEM_PROMPT, conversion_prompt};

/// `Ok(translated_code)` or the gateway failure, unchanged.
pub type ConversionResult = Result<String>;

pub struct ConversionService {
    gateway: Arc<dyn GatewayPort>,
    params: SamplingParams,
}

impl ConversionService {
    pub fn new(gateway: Arc<dyn GatewayPort>, params: SamplingParams) -> Self {
        Self { gateway, params }
    }

    /// Translate `req.source_code`. Identity requests return the input
    /// without touching the gateway.
    pub async fn convert(&self, req: &ConversionRequest) -> ConversionResult {
        if req.is_identity() {
            log::debug!("Identity conversion for {}, skipping gateway", req.from_language);
            return Ok(req.source_code.clone());
        }

        let completion = CompletionRequest {
            system_prompt: CONVERSION_SYSTEM_PROMPT.to_string(),
            messages: vec![Message::user(conversion_prompt(req))],
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
        };

        let text = self.gateway.complete(completion).await.map_err(|e| {
            log::error!(
                "Conversion {} -> {} failed ({:?}): {}",
                req.from_language,
                req.to_language,
                e.kind(),
                e
            );
            e
        })?;

        log::info!(
            "Converted {} chars of {} into {} chars of {}",
            req.source_code.chars().count(),
            req.from_language,
            text.trim().chars().count(),
            req.to_language
        );
        Ok(text.trim().to_string())
    }
}

use serde::{Deserialize, Serialize};

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const MODEL_VAR: &str = "GROQ_MODEL";
pub const API_BASE_VAR: &str = "GROQ_API_BASE";

/// Token ceiling and temperature for one kind of gateway call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl SamplingParams {
    /// Near-deterministic, sized for moderate code snippets.
    pub const CONVERSION: SamplingParams = SamplingParams {
        max_tokens: 1024,
        temperature: 0.1,
    };

    /// Exploratory, for free-form explanations.
    pub const CHAT: SamplingParams = SamplingParams {
        max_tokens: 512,
        temperature: 0.7,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub api_base: String,
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub conversion: SamplingParams,
    pub chat: SamplingParams,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.groq.com/openai".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key: None,
            conversion: SamplingParams::CONVERSION,
            chat: SamplingParams::CHAT,
        }
    }
}

impl GatewayConfig {
    /// Defaults overridden by `GROQ_*` environment variables. A blank key
    /// counts as absent.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        config.api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        if let Some(model) = lookup(MODEL_VAR).filter(|v| !v.trim().is_empty()) {
            config.model = model;
        }
        if let Some(base) = lookup(API_BASE_VAR).filter(|v| !v.trim().is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        config
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_base)
    }
}

/// Browser-side settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prefix for backend routes; relative means same origin.
    pub api_base: String,
    /// History entries forwarded with each chat request.
    pub history_sent: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            history_sent: 5,
        }
    }
}

impl ClientConfig {
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

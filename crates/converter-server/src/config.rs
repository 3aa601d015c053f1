use std::path::PathBuf;

use converter_types::{ConverterError, Result, config::GatewayConfig};

pub const DEFAULT_PORT: u16 = 3001;

/// Process-level settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built web client to serve for non-API paths
    pub static_dir: Option<PathBuf>,
    pub gateway: GatewayConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: None,
            gateway: GatewayConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self {
            gateway: GatewayConfig::from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| {
                ConverterError::Configuration(format!("PORT must be a number, got {:?}", port))
            })?;
        }
        config.static_dir = lookup("STATIC_DIR")
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// What happened when looking for a `.env` file.
#[derive(Debug, PartialEq)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    Missing,
    Unreadable(String),
}

impl DotenvStatus {
    pub fn from_result(result: std::result::Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => DotenvStatus::Loaded(path),
            Err(e) if e.not_found() => DotenvStatus::Missing,
            Err(e) => DotenvStatus::Unreadable(e.to_string()),
        }
    }

    /// Report through tracing. Only an unreadable file is worth a warning.
    pub fn log(&self) {
        match self {
            DotenvStatus::Loaded(path) => tracing::debug!("Loaded environment from {}", path.display()),
            DotenvStatus::Missing => tracing::debug!("No .env file, using process environment"),
            DotenvStatus::Unreadable(e) => tracing::warn!("Ignoring unreadable .env: {}", e),
        }
    }
}

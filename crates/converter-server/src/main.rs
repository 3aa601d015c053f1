use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use converter_server::config::DotenvStatus;
use converter_server::{ApiServer, OpenAiCompatGateway, ServerConfig};
use converter_types::config::API_KEY_VAR;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Read before the subscriber so RUST_LOG may come from .env
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // A missing .env is fine; real environment variables still apply
    DotenvStatus::from_result(dotenv).log();

    let config = ServerConfig::from_env()?;
    if !config.gateway.has_credential() {
        tracing::warn!(
            "{} is not set: /convert and /chat will answer with a configuration error",
            API_KEY_VAR
        );
    }

    let gateway = Arc::new(OpenAiCompatGateway::new(config.gateway.clone()));
    ApiServer::new(config, gateway).start().await
}

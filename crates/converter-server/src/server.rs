//! Router assembly and the listening server.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use converter_core::ports::GatewayPort;

use crate::config::ServerConfig;
use crate::handlers::{ApiState, SharedState, chat, convert, health_check};

/// Build the application. Routes are served both at the root and under
/// `/api`; anything else falls through to `static_dir` when given.
pub fn router(state: SharedState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/convert", post(convert))
        .route("/chat", post(chat))
        .route("/health", get(health_check));

    let mut app = Router::new().merge(api.clone()).nest("/api", api);
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Main API server
pub struct ApiServer {
    config: ServerConfig,
    state: SharedState,
}

impl ApiServer {
    pub fn new(config: ServerConfig, gateway: Arc<dyn GatewayPort>) -> Self {
        let state = Arc::new(ApiState::new(gateway, &config.gateway));
        Self { config, state }
    }

    /// Bind and serve until the process is stopped
    pub async fn start(&self) -> Result<()> {
        let app = router(self.state.clone(), self.config.static_dir.as_deref());

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Code Converter server running on {}", addr);
        info!("Using model {}", self.config.gateway.model);
        if let Some(dir) = &self.config.static_dir {
            info!("Serving web client from {}", dir.display());
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to run API server: {}", e))?;

        Ok(())
    }
}

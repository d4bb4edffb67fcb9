// This project was developed with assistance from GitHub Copilot
// Server setup and configuration

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::endpoints::{AppState, auth_handler, jwks_handler};
use crate::error::IssuerError;
use crate::registry::KeyRegistry;

/// Create the application router with all endpoints
pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        .route("/.well-known/jwks.json", get(jwks_handler))
        .route("/jwks", get(jwks_handler)) // Alternative endpoint
        .route("/auth", post(auth_handler))
        .with_state(app_state)
}

/// Generate the keys, then serve until the listener fails.
pub async fn start_server(config: ServerConfig) -> Result<(), IssuerError> {
    // Keys exist before the first request is accepted
    let registry = KeyRegistry::new()?;
    let app = create_app(Arc::new(registry));

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "JWKS issuer listening");
    info!("  GET  /.well-known/jwks.json - JWKS endpoint");
    info!("  GET  /jwks                   - Alternative JWKS endpoint");
    info!("  POST /auth                   - Authentication endpoint");
    info!("  POST /auth?expired=true      - Auth with expired key");

    axum::serve(listener, app).await?;

    Ok(())
}

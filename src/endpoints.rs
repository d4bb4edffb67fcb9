// This project was developed with assistance from GitHub Copilot
// JWKS and auth endpoint implementation

use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::error::IssuerError;
use crate::registry::KeyRegistry;
use crate::token::issue_token;
use crate::types::{AuthQuery, AuthResponse, JwksResponse};

/// Application state: the one key registry for this process
pub type AppState = Arc<KeyRegistry>;

/// JWKS endpoint handler - serves public keys in JWKS format
/// Only returns keys that have not expired
pub async fn jwks_handler(State(registry): State<AppState>) -> Json<JwksResponse> {
    let jwks = registry.jwks();
    debug!(published = jwks.keys.len(), "Serving JWKS");
    Json(jwks)
}

/// Auth endpoint handler - issues JWTs for authentication
/// `?expired=true` signs with the expired key instead
pub async fn auth_handler(
    State(registry): State<AppState>,
    Query(params): Query<AuthQuery>,
) -> Result<Json<AuthResponse>, IssuerError> {
    let token = issue_token(&registry, params.expired)?;
    Ok(Json(AuthResponse { token }))
}

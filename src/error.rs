// This project was developed with assistance from GitHub Copilot
// Error types for the JWKS issuer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures of the key subsystem or the server around it.
///
/// None of these are expected in normal operation.
#[derive(Error, Debug)]
pub enum IssuerError {
    #[error("RSA key generation failed: {0}")]
    KeyGeneration(#[from] rsa::Error),

    #[error("Private key encoding failed: {0}")]
    KeyEncoding(#[from] rsa::pkcs8::Error),

    #[error("Token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for IssuerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

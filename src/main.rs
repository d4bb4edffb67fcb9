// This project was developed with assistance from GitHub Copilot
// JWKS issuer binary
//
// Publishes one live RSA public key as a JWKS and issues RS256 tokens,
// optionally signed by a second key that is already expired and never
// published.

use jwks_issuer::{config::ServerConfig, server};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = server::start_server(ServerConfig::default()).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

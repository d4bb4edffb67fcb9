// This project was developed with assistance from GitHub Copilot
// Library module for the JWKS issuer

pub mod clock;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod key_management;
pub mod registry;
pub mod server;
pub mod token;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::IssuerError;
pub use registry::KeyRegistry;
pub use types::{Claims, JsonWebKey, JwksResponse, KeyMaterial};

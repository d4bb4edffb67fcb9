// This project was developed with assistance from GitHub Copilot
// Registry holding the process's two signing keys

use std::sync::Arc;
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::error::IssuerError;
use crate::types::{JwksResponse, KeyMaterial};

/// Offset of both keys' expiry from startup, in seconds.
pub const KEY_LIFETIME_SECS: i64 = 3600;

/// Owns one live and one already-expired key for the life of the process.
///
/// The expired key is never published but can still sign, so clients can be
/// tested against tokens whose `kid` is missing from the JWKS.
pub struct KeyRegistry {
    valid_key: KeyMaterial,
    expired_key: KeyMaterial,
    clock: Arc<dyn Clock>,
}

impl KeyRegistry {
    /// Generate both keys against the system clock
    pub fn new() -> Result<Self, IssuerError> {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Generate both keys relative to `clock.now()`; the same clock drives `jwks()`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Result<Self, IssuerError> {
        let now = clock.now();
        // Saturate at the ends of the i64 range rather than wrap
        let valid_key = KeyMaterial::generate(now.saturating_add(KEY_LIFETIME_SECS))?;
        let expired_key = KeyMaterial::generate(now.saturating_sub(KEY_LIFETIME_SECS))?;

        info!(
            valid_kid = %valid_key.kid(),
            valid_exp = valid_key.expires_at(),
            expired_kid = %expired_key.kid(),
            expired_exp = expired_key.expires_at(),
            "Key registry initialized"
        );

        Ok(Self {
            valid_key,
            expired_key,
            clock,
        })
    }

    pub fn valid_key(&self) -> &KeyMaterial {
        &self.valid_key
    }

    pub fn expired_key(&self) -> &KeyMaterial {
        &self.expired_key
    }

    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// Public keys that may be used for verification right now.
    ///
    /// Holds the valid key until its expiry passes, then nothing. The expired
    /// key is never included.
    pub fn jwks(&self) -> JwksResponse {
        let mut keys = Vec::with_capacity(1);
        if self.valid_key.is_valid_at(self.clock.now()) {
            keys.push(self.valid_key.public_jwk());
        }
        JwksResponse { keys }
    }

    /// Pick the key to sign with. No expiry check is made here.
    pub fn select_signing_key(&self, want_expired: bool) -> &KeyMaterial {
        if want_expired {
            &self.expired_key
        } else {
            &self.valid_key
        }
    }
}

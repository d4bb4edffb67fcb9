// This project was developed with assistance from GitHub Copilot
// RS256 token issuance

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use tracing::info;

use crate::error::IssuerError;
use crate::registry::KeyRegistry;
use crate::types::{Claims, KeyMaterial};

/// Subject placed in every issued token.
pub const TOKEN_SUBJECT: &str = "user";

/// Sign a token with the valid key, or with the expired key when `want_expired` is set.
///
/// `exp` is the signing key's own expiry, so an expired-key token is already
/// stale when issued.
pub fn issue_token(registry: &KeyRegistry, want_expired: bool) -> Result<String, IssuerError> {
    let key = registry.select_signing_key(want_expired);
    let claims = Claims {
        sub: TOKEN_SUBJECT.to_string(),
        iat: registry.now(),
        exp: key.expires_at(),
    };

    let token = sign_claims(key, &claims)?;
    info!(kid = %key.kid(), expired = want_expired, "Issued token");
    Ok(token)
}

/// Encode `claims` as a JWT signed by `key`, with its kid in the header.
pub fn sign_claims(key: &KeyMaterial, claims: &Claims) -> Result<String, IssuerError> {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(key.kid().to_string());

    // jsonwebtoken only takes PEM/DER, not rsa's key type
    let private_key_pem = key.private_key().to_pkcs8_pem(LineEnding::LF)?;
    let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())?;

    Ok(encode(&header, claims, &encoding_key)?)
}

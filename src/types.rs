// This project was developed with assistance from GitHub Copilot
// Data structures for the JWKS issuer

use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Deserializer, Serialize};

/// One RSA signing key with its identity and expiry.
///
/// Fields are private to this module and only readable through accessors,
/// so a key never changes after `generate`.
pub struct KeyMaterial {
    kid: String,                // Key ID
    expires_at: i64,            // Expiry (Unix seconds)
    private_key: RsaPrivateKey, // RSA private key
    public_key: RsaPublicKey,   // RSA public key
}

impl KeyMaterial {
    /// Assemble a key; the public half is derived from `private_key`.
    pub(crate) fn from_parts(kid: String, expires_at: i64, private_key: RsaPrivateKey) -> Self {
        let public_key = RsaPublicKey::from(&private_key);
        Self {
            kid,
            expires_at,
            private_key,
            public_key,
        }
    }

    pub fn kid(&self) -> &str {
        &self.kid
    }

    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }
}

/// JSON Web Key structure for JWKS response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWebKey {
    pub kty: String, // Key type (RSA)
    pub kid: String, // Key ID
    #[serde(rename = "use")]
    pub key_use: String, // Key usage (sig for signature)
    pub alg: String, // Algorithm (RS256)
    pub n: String,   // Modulus (base64url)
    pub e: String,   // Exponent (base64url)
}

/// JWKS response format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JwksResponse {
    pub keys: Vec<JsonWebKey>,
}

/// JWT Claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject
    pub iat: i64,    // Issued at
    pub exp: i64,    // Expires at
}

/// Auth endpoint response
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Query parameters for auth endpoint
#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub expired: bool,
}

/// Lenient boolean parsing for query flags. A bare `?expired` counts as true.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| {
        serde::de::Error::invalid_value(serde::de::Unexpected::Str(&raw), &"a boolean flag")
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_derives_public_half() {
        let private_key = RsaPrivateKey::new(&mut rand::rngs::OsRng, 2048).unwrap();
        let expected_public = RsaPublicKey::from(&private_key);

        let key = KeyMaterial::from_parts("kid-1".to_string(), 42, private_key);
        assert_eq!(key.kid(), "kid-1");
        assert_eq!(key.expires_at(), 42);
        assert_eq!(key.public_key(), &expected_public);
        assert_eq!(&RsaPublicKey::from(key.private_key()), key.public_key());
    }

    #[test]
    fn test_parse_flag_values() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(""), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("Off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_json_web_key_serializes_use_field() {
        let jwk = JsonWebKey {
            kty: "RSA".to_string(),
            kid: "k1".to_string(),
            key_use: "sig".to_string(),
            alg: "RS256".to_string(),
            n: "AQAB".to_string(),
            e: "AQAB".to_string(),
        };
        let value = serde_json::to_value(&jwk).unwrap();
        assert_eq!(value["use"], "sig");
        assert!(value.get("key_use").is_none());
    }
}

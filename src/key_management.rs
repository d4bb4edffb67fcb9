// This project was developed with assistance from GitHub Copilot
// Key generation and JWK rendering

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use uuid::Uuid;

use crate::error::IssuerError;
use crate::types::{JsonWebKey, KeyMaterial};

const RSA_BITS: usize = 2048;

impl KeyMaterial {
    /// Generate a new 2048-bit RSA key pair that expires at `expires_at`
    pub fn generate(expires_at: i64) -> Result<Self, IssuerError> {
        let mut rng = OsRng;
        let private_key = RsaPrivateKey::new(&mut rng, RSA_BITS)?;

        Ok(KeyMaterial::from_parts(
            Uuid::new_v4().to_string(),
            expires_at,
            private_key,
        ))
    }

    /// A key is valid strictly before its expiry second.
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.expires_at() > now
    }

    /// Public half as a JWK. `n` and `e` are unsigned big-endian, base64url without padding.
    pub fn public_jwk(&self) -> JsonWebKey {
        let n_b64 = URL_SAFE_NO_PAD.encode(self.public_key().n().to_bytes_be());
        let e_b64 = URL_SAFE_NO_PAD.encode(self.public_key().e().to_bytes_be());

        JsonWebKey {
            kty: "RSA".to_string(),
            kid: self.kid().to_string(),
            key_use: "sig".to_string(),
            alg: "RS256".to_string(),
            n: n_b64,
            e: e_b64,
        }
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("kid", &self.kid())
            .field("expires_at", &self.expires_at())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::{BigUint, RsaPublicKey};

    #[test]
    fn test_generate_sets_metadata() {
        let a = KeyMaterial::generate(4600).expect("keygen failed");
        let b = KeyMaterial::generate(4600).expect("keygen failed");

        assert_eq!(a.expires_at(), 4600);
        assert_ne!(a.kid(), b.kid(), "kids must be unique");
        assert!(Uuid::parse_str(a.kid()).is_ok());
        assert_eq!(a.public_key().size() * 8, 2048);

        assert!(a.is_valid_at(4599));
        assert!(!a.is_valid_at(4600));
        assert!(!a.is_valid_at(5000));
    }

    #[test]
    fn test_public_jwk_reconstructs_public_key() {
        let key = KeyMaterial::generate(0).expect("keygen failed");
        let jwk = key.public_jwk();

        assert_eq!(jwk.kty, "RSA");
        assert_eq!(jwk.kid, key.kid());
        assert_eq!(jwk.key_use, "sig");
        assert_eq!(jwk.alg, "RS256");
        assert_eq!(jwk.e, "AQAB");
        assert!(!jwk.n.contains('='));

        let n = BigUint::from_bytes_be(&URL_SAFE_NO_PAD.decode(&jwk.n).unwrap());
        let e = BigUint::from_bytes_be(&URL_SAFE_NO_PAD.decode(&jwk.e).unwrap());
        let rebuilt = RsaPublicKey::new(n, e).expect("invalid public key");
        assert_eq!(&rebuilt, key.public_key());
    }

    #[test]
    fn test_debug_hides_key_material() {
        let key = KeyMaterial::generate(1).expect("keygen failed");
        let rendered = format!("{key:?}");
        assert!(rendered.contains(key.kid()));
        assert!(!rendered.contains("private_key"));
    }
}

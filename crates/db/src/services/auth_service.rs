use bcrypt::{DEFAULT_COST, hash, verify};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Password and session-token primitives for the login flow.
pub struct AuthService;

impl AuthService {
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        hash(password, DEFAULT_COST)
    }

    pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
        verify(password, hash)
    }

    /// New opaque session token. UUID v4 gives 122 bits of randomness.
    pub fn generate_session_token() -> String {
        Uuid::new_v4().to_string()
    }

    /// SHA-256 of the token, hex encoded. Sessions are looked up on every
    /// authenticated request, so a fast hash is the right fit here; the
    /// tokens themselves are already high entropy, unlike passwords.
    pub fn hash_session_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = AuthService::hash_password("correct horse").unwrap();
        assert!(AuthService::verify_password("correct horse", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn session_tokens_are_unique() {
        let a = AuthService::generate_session_token();
        let b = AuthService::generate_session_token();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn token_hash_is_stable() {
        let token = "fixed-token";
        assert_eq!(
            AuthService::hash_session_token(token),
            AuthService::hash_session_token(token)
        );
        assert_ne!(
            AuthService::hash_session_token(token),
            AuthService::hash_session_token("other-token")
        );
    }
}

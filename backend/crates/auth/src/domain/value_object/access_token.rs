//! Access Token Value Object
//!
//! Bearer credential handed out at login:
//!
//! ```text
//! <user_id>.<issued_at_ms>.<nonce>.<base64url(HMAC-SHA256(secret, "<user_id>.<issued_at_ms>.<nonce>"))>
//! ```
//!
//! `nonce` is 16 random bytes (base64url), so two logins never share a
//! token even within the same millisecond.
//!
//! Tokens carry no expiry. The only way to invalidate one is the blacklist,
//! which stores [`token_digest`] rather than the token itself.

use chrono::Utc;
use platform::crypto::{
    from_base64url, hmac_sha256, random_bytes, sha256_hex, to_base64url, verify_hmac_sha256,
};
use thiserror::Error;

use kernel::id::UserId;

/// Random bytes per token
const NONCE_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Malformed access token")]
    Malformed,

    #[error("Access token signature mismatch")]
    BadSignature,
}

/// Decoded access token claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    user_id: UserId,
    issued_at_ms: i64,
    nonce: String,
}

impl AccessToken {
    /// Claims for a token issued now
    pub fn issue(user_id: UserId) -> Self {
        Self {
            user_id,
            issued_at_ms: Utc::now().timestamp_millis(),
            nonce: to_base64url(&random_bytes::<NONCE_LENGTH>()),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    fn payload(&self) -> String {
        format!("{}.{}.{}", self.user_id, self.issued_at_ms, self.nonce)
    }

    /// Encode and sign
    pub fn sign(&self, secret: &[u8]) -> String {
        let payload = self.payload();
        let tag = hmac_sha256(secret, payload.as_bytes());
        format!("{}.{}", payload, to_base64url(&tag))
    }

    /// Check the signature (constant time) and decode the claims
    pub fn verify(token: &str, secret: &[u8]) -> Result<Self, TokenError> {
        let (payload, signature) = token.rsplit_once('.').ok_or(TokenError::Malformed)?;
        let tag = from_base64url(signature).map_err(|_| TokenError::Malformed)?;

        if !verify_hmac_sha256(secret, payload.as_bytes(), &tag) {
            return Err(TokenError::BadSignature);
        }

        let mut parts = payload.splitn(3, '.');
        let (Some(user_id), Some(issued_at), Some(nonce)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Malformed);
        };

        let user_id = user_id.parse::<UserId>().map_err(|_| TokenError::Malformed)?;
        let issued_at_ms = issued_at.parse::<i64>().map_err(|_| TokenError::Malformed)?;
        if nonce.is_empty() {
            return Err(TokenError::Malformed);
        }

        Ok(Self {
            user_id,
            issued_at_ms,
            nonce: nonce.to_string(),
        })
    }
}

/// Blacklist key for a raw token string (SHA-256, lowercase hex)
pub fn token_digest(token: &str) -> String {
    sha256_hex(token.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    #[test]
    fn test_sign_and_verify() {
        let claims = AccessToken::issue(UserId::new());
        let token = claims.sign(SECRET);

        let decoded = AccessToken::verify(&token, SECRET).unwrap();
        assert_eq!(decoded, claims);
        assert_eq!(token.split('.').count(), 4);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = AccessToken::issue(UserId::new()).sign(SECRET);
        assert_eq!(
            AccessToken::verify(&token, b"another-secret-another-secret-00"),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_tampered_user_id_rejected() {
        let token = AccessToken::issue(UserId::new()).sign(SECRET);
        let (_, rest) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", UserId::new(), rest);
        assert_eq!(
            AccessToken::verify(&forged, SECRET),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(AccessToken::verify("", SECRET), Err(TokenError::Malformed));
        assert_eq!(
            AccessToken::verify("no-dots-here", SECRET),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            AccessToken::verify("a.b.!!!", SECRET),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_same_millisecond_logins_get_distinct_tokens() {
        let user_id = UserId::new();
        let first = AccessToken::issue(user_id);
        let second = AccessToken {
            issued_at_ms: first.issued_at_ms,
            ..AccessToken::issue(user_id)
        };

        let (a, b) = (first.sign(SECRET), second.sign(SECRET));
        assert_ne!(a, b);
        assert_ne!(token_digest(&a), token_digest(&b));
        assert_eq!(AccessToken::verify(&b, SECRET).unwrap().user_id(), user_id);
    }

    #[test]
    fn test_signed_payload_without_nonce_is_malformed() {
        let payload = format!("{}.{}", UserId::new(), 1_700_000_000_000i64);
        let token = format!("{}.{}", payload, to_base64url(&hmac_sha256(SECRET, payload.as_bytes())));
        assert_eq!(AccessToken::verify(&token, SECRET), Err(TokenError::Malformed));
    }

    #[test]
    fn test_digest_is_stable_hex() {
        let digest = token_digest("abc");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, token_digest("abc"));
        assert_ne!(digest, token_digest("abd"));
    }
}

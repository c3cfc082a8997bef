//! Session Token
//!
//! Stateless signed token carried in the session cookie:
//!
//! ```text
//! <user_id>.<expires_at_ms>.<base64url(HMAC-SHA256(secret, "<user_id>.<expires_at_ms>"))>
//! ```
//!
//! Nothing is stored server-side, so a token cannot be revoked before it
//! expires.

use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;

/// Current wall-clock time in Unix milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A session established by sign-up or sign-in
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub user_id: UserId,
    pub token: SessionToken,
    pub expires_at_ms: i64,
}

impl IssuedSession {
    /// Issue a token for `user_id` valid for the configured TTL
    pub fn start(user_id: UserId, config: &AuthConfig) -> Self {
        let expires_at_ms = now_ms().saturating_add(config.session_ttl_ms());
        Self {
            user_id,
            token: SessionToken::issue(user_id, expires_at_ms, &config.session_secret),
            expires_at_ms,
        }
    }
}

/// Verified contents of a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClaims {
    pub user_id: UserId,
    pub expires_at_ms: i64,
}

/// Signed session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Sign a token for `user_id` that expires at `expires_at_ms`
    pub fn issue(user_id: UserId, expires_at_ms: i64, secret: &[u8]) -> Self {
        let payload = format!("{}.{}", user_id, expires_at_ms);
        let signature = hmac_sha256(secret, payload.as_bytes());
        Self(format!("{}.{}", payload, to_base64_url(&signature)))
    }

    /// Check signature and expiry
    ///
    /// Returns `None` for anything that is not a live token signed with
    /// `secret`.
    pub fn verify(raw: &str, secret: &[u8], now_ms: i64) -> Option<SessionClaims> {
        let (payload, signature_b64) = raw.rsplit_once('.')?;
        let signature = from_base64_url(signature_b64).ok()?;

        if !verify_hmac_sha256(secret, payload.as_bytes(), &signature) {
            return None;
        }

        let (user_id, expires_at_ms) = payload.split_once('.')?;
        let user_id: UserId = user_id.parse().ok()?;
        let expires_at_ms: i64 = expires_at_ms.parse().ok()?;

        if now_ms >= expires_at_ms {
            return None;
        }

        Some(SessionClaims {
            user_id,
            expires_at_ms,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

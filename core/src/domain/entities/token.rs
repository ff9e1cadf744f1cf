//! Token claims for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Role;

/// Default access token expiry (15 minutes)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_SECS: i64 = 900;

/// Default refresh token expiry (7 days)
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_SECS: i64 = 604_800;

/// JWT issuer
pub const JWT_ISSUER: &str = "room-booking";

/// JWT audience
pub const JWT_AUDIENCE: &str = "room-booking-api";

/// Claims structure for JWT payload
///
/// Access tokens carry the role claim; refresh tokens carry a unique `jti`
/// and deliberately no role, so a refresh token can never be used to assert
/// privilege directly. Privilege is re-derived from the user store when the
/// token is exchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,

    /// Account role; present on access tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at timestamp (seconds since the epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since the epoch)
    pub exp: i64,

    /// Unique token id; present on refresh tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Creates claims for an access token issued at `now`
    pub fn new_access_token(subject: impl Into<String>, role: Role, now: DateTime<Utc>, ttl_secs: i64) -> Self {
        let expiry = now + Duration::seconds(ttl_secs);
        Self {
            sub: subject.into(),
            role: Some(role),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: None,
        }
    }

    /// Creates claims for a refresh token issued at `now`
    ///
    /// The `jti` is unique per token. Nothing server-side tracks it in this
    /// design, so a refresh token stays valid until its natural expiry.
    pub fn new_refresh_token(subject: impl Into<String>, now: DateTime<Utc>, ttl_secs: i64) -> Self {
        let expiry = now + Duration::seconds(ttl_secs);
        Self {
            sub: subject.into(),
            role: None,
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Some(Uuid::new_v4().to_string()),
        }
    }

    /// Whether the claims are expired at the given instant
    ///
    /// A token is valid strictly before `exp`; at `exp` it is expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Token pair returned to the client after login or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with the given lifetimes
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_access_token_claims() {
        let now = fixed_now();
        let claims = Claims::new_access_token("alice@example.com", Role::User, now, 900);

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.role, Some(Role::User));
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, now.timestamp() + 900);
        assert!(claims.jti.is_none());
    }

    #[test]
    fn test_refresh_token_claims_have_jti_and_no_role() {
        let now = fixed_now();
        let claims = Claims::new_refresh_token("alice@example.com", now, 604_800);

        assert_eq!(claims.role, None);
        assert!(claims.jti.is_some());
        assert_eq!(claims.exp, now.timestamp() + 604_800);
    }

    #[test]
    fn test_refresh_token_jti_is_unique() {
        let now = fixed_now();
        let a = Claims::new_refresh_token("alice@example.com", now, 60);
        let b = Claims::new_refresh_token("alice@example.com", now, 60);
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_expiry_boundary() {
        let now = fixed_now();
        let claims = Claims::new_access_token("alice@example.com", Role::User, now, 900);

        assert!(!claims.is_expired_at(now));
        assert!(!claims.is_expired_at(now + Duration::seconds(899)));
        // Valid strictly before exp, expired exactly at exp.
        assert!(claims.is_expired_at(now + Duration::seconds(900)));
        assert!(claims.is_expired_at(now + Duration::seconds(901)));
    }

    #[test]
    fn test_claims_serialization_skips_absent_fields() {
        let now = fixed_now();
        let access = Claims::new_access_token("alice@example.com", Role::Admin, now, 900);
        let json = serde_json::to_string(&access).unwrap();
        assert!(json.contains("\"role\":\"ADMIN\""));
        assert!(!json.contains("jti"));

        let refresh = Claims::new_refresh_token("alice@example.com", now, 60);
        let json = serde_json::to_string(&refresh).unwrap();
        assert!(json.contains("jti"));
        assert!(!json.contains("role"));
    }
}

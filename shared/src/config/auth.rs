//! JWT authentication configuration

use serde::{Deserialize, Serialize};

/// Base64 of `dev-access-secret-change-in-production`
const DEV_ACCESS_SECRET: &str = "ZGV2LWFjY2Vzcy1zZWNyZXQtY2hhbmdlLWluLXByb2R1Y3Rpb24=";

/// Base64 of `dev-refresh-secret-change-in-production`
const DEV_REFRESH_SECRET: &str = "ZGV2LXJlZnJlc2gtc2VjcmV0LWNoYW5nZS1pbi1wcm9kdWN0aW9u";

/// JWT authentication configuration
///
/// Access and refresh tokens are signed with independent secrets so that a
/// leaked access key cannot mint refresh tokens and vice versa. Both secrets
/// are provided base64-encoded.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Base64-encoded secret for signing access tokens
    pub access_secret: String,

    /// Base64-encoded secret for signing refresh tokens
    pub refresh_secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from(DEV_ACCESS_SECRET),
            refresh_secret: String::from(DEV_REFRESH_SECRET),
            access_token_expiry: 900,      // 15 minutes
            refresh_token_expiry: 604_800, // 7 days
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET`, `JWT_REFRESH_SECRET`, `JWT_ACCESS_TOKEN_EXPIRY`
    /// and `JWT_REFRESH_TOKEN_EXPIRY`, falling back to development defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("JWT_REFRESH_SECRET").unwrap_or(defaults.refresh_secret),
            access_token_expiry: std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
            refresh_token_expiry: std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86_400;
        self
    }

    /// Check if the development secrets are still in use (security warning)
    pub fn is_using_default_secrets(&self) -> bool {
        self.access_secret == DEV_ACCESS_SECRET || self.refresh_secret == DEV_REFRESH_SECRET
    }
}

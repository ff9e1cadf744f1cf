//! Configuration for the token service

use crate::domain::entities::token::{
    DEFAULT_ACCESS_TOKEN_EXPIRY_SECS, DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Access token time-to-live in seconds
    pub access_ttl_secs: i64,
    /// Refresh token time-to-live in seconds
    pub refresh_ttl_secs: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_ttl_secs: DEFAULT_ACCESS_TOKEN_EXPIRY_SECS,
            refresh_ttl_secs: DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
        }
    }
}

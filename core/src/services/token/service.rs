//! Main token service implementation

use std::sync::Arc;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, TokenError};
use crate::services::clock::Clock;

use super::codec::{KeyClass, TokenCodec};
use super::config::TokenServiceConfig;

/// Service for issuing and validating JWT access and refresh tokens
///
/// Issuance and validation are pure apart from reading the injected clock:
/// there is no server-side store of issued tokens. Refresh tokens carry a
/// unique `jti` that nothing tracks, so a compromised refresh token remains
/// valid until its natural expiry.
pub struct TokenService {
    codec: TokenCodec,
    clock: Arc<dyn Clock>,
    config: TokenServiceConfig,
}

impl TokenService {
    /// Creates a new token service
    pub fn new(codec: TokenCodec, clock: Arc<dyn Clock>, config: TokenServiceConfig) -> Self {
        Self {
            codec,
            clock,
            config,
        }
    }

    /// Issues a signed access token for a subject and role
    pub fn issue_access_token(&self, subject: &str, role: Role) -> Result<String, DomainError> {
        let claims =
            Claims::new_access_token(subject, role, self.clock.now(), self.config.access_ttl_secs);
        self.codec.encode(&claims, KeyClass::Access)
    }

    /// Issues a signed refresh token for a subject
    ///
    /// The refresh token carries no role claim; privilege is re-derived from
    /// the user store when the token is exchanged.
    pub fn issue_refresh_token(&self, subject: &str) -> Result<String, DomainError> {
        let claims =
            Claims::new_refresh_token(subject, self.clock.now(), self.config.refresh_ttl_secs);
        self.codec.encode(&claims, KeyClass::Refresh)
    }

    /// Issues an access/refresh token pair
    pub fn issue_pair(&self, subject: &str, role: Role) -> Result<TokenPair, DomainError> {
        let access_token = self.issue_access_token(subject, role)?;
        let refresh_token = self.issue_refresh_token(subject)?;
        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_ttl_secs,
            self.config.refresh_ttl_secs,
        ))
    }

    /// Validates a token against the selected key class and the current
    /// clock, returning the verified claims
    ///
    /// Signature and expiry must both pass. An expired token fails with the
    /// same error family as a forged one; the boundary must not reveal which
    /// check failed.
    pub fn validate(&self, token: &str, key_class: KeyClass) -> Result<Claims, DomainError> {
        let claims = self.codec.decode(token, key_class)?;
        if claims.is_expired_at(self.clock.now()) {
            return Err(DomainError::Token(TokenError::Expired));
        }
        Ok(claims)
    }

    /// Extracts the subject from a token, applying the same validation
    /// rules as `validate`
    pub fn subject_of(&self, token: &str, key_class: KeyClass) -> Result<String, DomainError> {
        Ok(self.validate(token, key_class)?.sub)
    }

    /// Access token lifetime in seconds
    pub fn access_ttl_secs(&self) -> i64 {
        self.config.access_ttl_secs
    }
}

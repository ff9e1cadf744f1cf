//! Compact claims codec.
//!
//! Pure encode/decode over the two signing-key classes. The codec verifies
//! signature, issuer, and audience; it deliberately does not check expiry,
//! which the token service evaluates against its injected clock.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};

/// Which signing key a token belongs to
///
/// Access and refresh tokens are signed with independent secrets: a leaked
/// access key must not allow minting refresh tokens and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Access,
    Refresh,
}

/// HS256 codec holding both key classes
pub struct TokenCodec {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Builds a codec from two independent base64-encoded symmetric secrets
    ///
    /// Fails when either secret is not valid base64. This is a startup-time
    /// misconfiguration and should abort the process, not be retried.
    pub fn from_base64_secrets(
        access_secret: &str,
        refresh_secret: &str,
    ) -> Result<Self, DomainError> {
        let access_bytes = BASE64.decode(access_secret).map_err(|e| DomainError::Internal {
            message: format!("Failed to decode access signing secret from base64: {}", e),
        })?;
        let refresh_bytes = BASE64.decode(refresh_secret).map_err(|e| DomainError::Internal {
            message: format!("Failed to decode refresh signing secret from base64: {}", e),
        })?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.leeway = 0;
        // Expiry is evaluated by the service against its injected clock.
        validation.validate_exp = false;

        Ok(Self {
            access_encoding: EncodingKey::from_secret(&access_bytes),
            access_decoding: DecodingKey::from_secret(&access_bytes),
            refresh_encoding: EncodingKey::from_secret(&refresh_bytes),
            refresh_decoding: DecodingKey::from_secret(&refresh_bytes),
            validation,
        })
    }

    /// Signs and encodes claims into a compact token
    pub fn encode(&self, claims: &Claims, key_class: KeyClass) -> Result<String, DomainError> {
        let key = match key_class {
            KeyClass::Access => &self.access_encoding,
            KeyClass::Refresh => &self.refresh_encoding,
        };
        encode(&Header::new(Algorithm::HS256), claims, key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Decodes a compact token and verifies its signature, issuer, and
    /// audience against the selected key class
    pub fn decode(&self, token: &str, key_class: KeyClass) -> Result<Claims, DomainError> {
        let key = match key_class {
            KeyClass::Access => &self.access_decoding,
            KeyClass::Refresh => &self.refresh_decoding,
        };
        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            if e.kind() == &jsonwebtoken::errors::ErrorKind::InvalidSignature {
                DomainError::Token(TokenError::BadSignature)
            } else {
                DomainError::Token(TokenError::Malformed)
            }
        })?;
        Ok(token_data.claims)
    }
}

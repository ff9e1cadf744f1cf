//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{AuthError, EntityError, TokenError, ValidationError};

pub use rb_shared::types::response::ErrorResponse;

use thiserror::Error;

/// Core domain errors
///
/// The four expected, user-triggerable families (token, auth, entity,
/// validation) are handled at the API boundary and never propagate as
/// generic faults. `Internal` covers unexpected failures (store unreachable,
/// misconfiguration) and maps to a 500.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

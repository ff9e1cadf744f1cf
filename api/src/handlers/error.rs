//! Mapping of domain errors onto HTTP responses.
//!
//! Every token failure and unknown-subject failure collapses into one
//! generic 401 body; the specific cause goes to the log only, so the
//! boundary never reveals whether a token was expired, forged, or orphaned.

use actix_web::HttpResponse;

use rb_core::errors::{AuthError, DomainError, EntityError};
use rb_shared::types::response::ErrorResponse;

/// Generic 401 body shared by all token and subject failures
fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(
        "UNAUTHORIZED",
        "Authentication required",
    ))
}

/// Converts a domain error into the HTTP response the API contract defines
pub fn domain_error_response(error: DomainError) -> HttpResponse {
    match &error {
        DomainError::Token(token_error) => {
            log::warn!("Token rejected: {}", token_error);
            unauthorized_response()
        }
        DomainError::Auth(AuthError::UnknownSubject { subject }) => {
            log::warn!("Token subject no longer exists: {}", subject);
            unauthorized_response()
        }
        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::Unauthorized().json(ErrorResponse::from(AuthError::InvalidCredentials))
        }
        DomainError::Auth(AuthError::Forbidden) => {
            HttpResponse::Forbidden().json(ErrorResponse::from(AuthError::Forbidden))
        }
        DomainError::Entity(entity_error) => {
            let response = ErrorResponse::from(entity_error.clone());
            match entity_error {
                EntityError::UserNotFound { .. }
                | EntityError::RoomNotFound { .. }
                | EntityError::ReservationNotFound { .. } => {
                    HttpResponse::NotFound().json(response)
                }
                EntityError::UserAlreadyExists { .. }
                | EntityError::RoomAlreadyExists { .. }
                | EntityError::ReservationConflict { .. } => {
                    HttpResponse::Conflict().json(response)
                }
            }
        }
        DomainError::Validation(validation_error) => {
            HttpResponse::BadRequest().json(ErrorResponse::from(validation_error.clone()))
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "INTERNAL_ERROR",
                "An internal error occurred",
            ))
        }
    }
}

/// Converts request body validation failures into a 400 response
pub fn validation_error_response(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "VALIDATION_ERROR",
        errors.to_string(),
    ))
}

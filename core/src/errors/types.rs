//! Error type definitions for authentication, token handling, and booking
//! operations. HTTP status mapping lives in the presentation layer.

use chrono::{DateTime, Utc};
use rb_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Token-related errors
///
/// The three failure causes are distinguished internally (and in logs), but
/// the API boundary surfaces them identically so a client cannot tell a
/// forged token from an expired one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    BadSignature,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Authentication and authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token subject no longer maps to a stored user (e.g. deleted after
    /// issuance). An authentication failure, not a server fault.
    #[error("Unknown subject: {subject}")]
    UnknownSubject { subject: String },

    #[error("Access denied")]
    Forbidden,
}

/// Entity lookup and uniqueness errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    #[error("User not found with id: {id}")]
    UserNotFound { id: i64 },

    #[error("User already exists with email: {email}")]
    UserAlreadyExists { email: String },

    #[error("Room not found with id: {id}")]
    RoomNotFound { id: i64 },

    #[error("Room already exists with name: {name}")]
    RoomAlreadyExists { name: String },

    #[error("Reservation not found with id: {id}")]
    ReservationNotFound { id: i64 },

    #[error("The room '{room_name}' is already reserved from {start} to {end}")]
    ReservationConflict {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        room_name: String,
    },
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid id: {id}")]
    InvalidId { id: i64 },

    #[error("Invalid interval: start {start} must be before end {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::Malformed => "TOKEN_MALFORMED",
            TokenError::BadSignature => "TOKEN_BAD_SIGNATURE",
            TokenError::GenerationFailed => "TOKEN_GENERATION_FAILED",
        };
        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::UnknownSubject { .. } => "UNKNOWN_SUBJECT",
            AuthError::Forbidden => "FORBIDDEN",
        };
        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert EntityError to ErrorResponse
impl From<EntityError> for ErrorResponse {
    fn from(err: EntityError) -> Self {
        let error_code = match &err {
            EntityError::UserNotFound { .. } => "USER_NOT_FOUND",
            EntityError::UserAlreadyExists { .. } => "USER_ALREADY_EXISTS",
            EntityError::RoomNotFound { .. } => "ROOM_NOT_FOUND",
            EntityError::RoomAlreadyExists { .. } => "ROOM_ALREADY_EXISTS",
            EntityError::ReservationNotFound { .. } => "RESERVATION_NOT_FOUND",
            EntityError::ReservationConflict { .. } => "RESERVATION_CONFLICT",
        };

        let response = ErrorResponse::new(error_code, err.to_string());
        match &err {
            EntityError::ReservationConflict {
                start,
                end,
                room_name,
            } => response
                .with_detail("room_name", serde_json::json!(room_name))
                .with_detail("conflicting_start", serde_json::json!(start.to_rfc3339()))
                .with_detail("conflicting_end", serde_json::json!(end.to_rfc3339())),
            _ => response,
        }
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::InvalidId { .. } => "INVALID_ID",
            ValidationError::InvalidInterval { .. } => "INVALID_INTERVAL",
        };
        ErrorResponse::new(error_code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_token_error_conversion() {
        let response: ErrorResponse = TokenError::Expired.into();
        assert_eq!(response.error, "TOKEN_EXPIRED");
        assert!(response.message.contains("expired"));
    }

    #[test]
    fn test_conflict_error_carries_interval_details() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 1, 11, 0, 0).unwrap();
        let err = EntityError::ReservationConflict {
            start,
            end,
            room_name: "Board Room".to_string(),
        };

        assert!(err.to_string().contains("Board Room"));

        let response: ErrorResponse = err.into();
        assert_eq!(response.error, "RESERVATION_CONFLICT");
        let details = response.details.unwrap();
        assert_eq!(details["room_name"], "Board Room");
        assert_eq!(details["conflicting_start"], start.to_rfc3339());
        assert_eq!(details["conflicting_end"], end.to_rfc3339());
    }

    #[test]
    fn test_forbidden_conversion() {
        let response: ErrorResponse = AuthError::Forbidden.into();
        assert_eq!(response.error, "FORBIDDEN");
    }
}

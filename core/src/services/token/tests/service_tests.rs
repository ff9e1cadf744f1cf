//! Tests for the token service: issuance, clock-driven expiry, and
//! refresh-token shape.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::entities::user::Role;
use crate::errors::{DomainError, TokenError};
use crate::services::clock::FixedClock;
use crate::services::token::KeyClass;

use super::{fixed_instant, test_service};

#[test]
fn test_access_token_round_trip() {
    let clock = Arc::new(FixedClock::new(fixed_instant()));
    let service = test_service(clock);

    let token = service
        .issue_access_token("alice@example.com", Role::User)
        .unwrap();
    let claims = service.validate(&token, KeyClass::Access).unwrap();

    assert_eq!(claims.sub, "alice@example.com");
    assert_eq!(claims.role, Some(Role::User));
}

#[test]
fn test_subject_of_returns_subject() {
    let clock = Arc::new(FixedClock::new(fixed_instant()));
    let service = test_service(clock);

    let token = service
        .issue_access_token("bob@example.com", Role::Admin)
        .unwrap();
    assert_eq!(
        service.subject_of(&token, KeyClass::Access).unwrap(),
        "bob@example.com"
    );
}

#[test]
fn test_access_token_expires_by_clock() {
    let clock = Arc::new(FixedClock::new(fixed_instant()));
    let service = test_service(Arc::clone(&clock));

    let token = service
        .issue_access_token("alice@example.com", Role::User)
        .unwrap();

    // Valid one second before the deadline.
    clock.advance(Duration::seconds(899));
    assert!(service.validate(&token, KeyClass::Access).is_ok());

    // Expired exactly at the deadline.
    clock.advance(Duration::seconds(1));
    let err = service.validate(&token, KeyClass::Access).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[test]
fn test_refresh_token_expires_by_clock() {
    let clock = Arc::new(FixedClock::new(fixed_instant()));
    let service = test_service(Arc::clone(&clock));

    let token = service.issue_refresh_token("alice@example.com").unwrap();

    clock.advance(Duration::seconds(604_799));
    assert!(service.validate(&token, KeyClass::Refresh).is_ok());

    clock.advance(Duration::seconds(1));
    let err = service.validate(&token, KeyClass::Refresh).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[test]
fn test_refresh_token_carries_jti_and_no_role() {
    let clock = Arc::new(FixedClock::new(fixed_instant()));
    let service = test_service(clock);

    let first = service.issue_refresh_token("alice@example.com").unwrap();
    let second = service.issue_refresh_token("alice@example.com").unwrap();

    let first_claims = service.validate(&first, KeyClass::Refresh).unwrap();
    let second_claims = service.validate(&second, KeyClass::Refresh).unwrap();

    assert!(first_claims.role.is_none());
    assert!(first_claims.jti.is_some());
    assert_ne!(first_claims.jti, second_claims.jti);
}

#[test]
fn test_access_token_rejected_as_refresh() {
    let clock = Arc::new(FixedClock::new(fixed_instant()));
    let service = test_service(clock);

    let token = service
        .issue_access_token("alice@example.com", Role::User)
        .unwrap();
    let err = service.validate(&token, KeyClass::Refresh).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::BadSignature)));
}

#[test]
fn test_issue_pair_reports_lifetimes() {
    let clock = Arc::new(FixedClock::new(fixed_instant()));
    let service = test_service(clock);

    let pair = service.issue_pair("alice@example.com", Role::User).unwrap();

    assert_eq!(pair.access_expires_in, 900);
    assert_eq!(pair.refresh_expires_in, 604_800);

    let access = service.validate(&pair.access_token, KeyClass::Access).unwrap();
    let refresh = service
        .validate(&pair.refresh_token, KeyClass::Refresh)
        .unwrap();
    assert_eq!(access.sub, refresh.sub);
    assert_eq!(access.role, Some(Role::User));
    assert!(refresh.role.is_none());
}

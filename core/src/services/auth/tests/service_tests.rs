//! Tests for registration, login, and refresh flows.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::entities::user::Role;
use crate::errors::{AuthError, DomainError, EntityError, TokenError};
use crate::repositories::user::r#trait::UserRepository;
use crate::services::token::KeyClass;

use super::auth_service;

#[tokio::test]
async fn test_register_hashes_password() {
    let (service, users, _clock) = auth_service();

    let user = service
        .register("Alice", "alice@example.com", "s3cret-pass", "111")
        .await
        .unwrap();

    assert_eq!(user.role, Role::User);
    assert_ne!(user.password_hash, "s3cret-pass");
    assert!(bcrypt::verify("s3cret-pass", &user.password_hash).unwrap());
    assert!(users.exists_by_email("alice@example.com").await.unwrap());
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let (service, _users, _clock) = auth_service();

    service
        .register("Alice", "alice@example.com", "s3cret-pass", "111")
        .await
        .unwrap();
    let err = service
        .register("Other Alice", "alice@example.com", "other-pass", "222")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Entity(EntityError::UserAlreadyExists { .. })
    ));
}

#[tokio::test]
async fn test_login_issues_valid_pair() {
    let (service, _users, _clock) = auth_service();
    service
        .register("Alice", "alice@example.com", "s3cret-pass", "111")
        .await
        .unwrap();

    let pair = service.login("alice@example.com", "s3cret-pass").await.unwrap();
    assert_eq!(pair.access_expires_in, 900);
    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (service, _users, _clock) = auth_service();
    service
        .register("Alice", "alice@example.com", "s3cret-pass", "111")
        .await
        .unwrap();

    let wrong_password = service
        .login("alice@example.com", "wrong-pass")
        .await
        .unwrap_err();
    let unknown_email = service
        .login("nobody@example.com", "s3cret-pass")
        .await
        .unwrap_err();

    assert!(matches!(
        wrong_password,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_email,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_refresh_issues_new_pair() {
    let (service, _users, clock) = auth_service();
    service
        .register("Alice", "alice@example.com", "s3cret-pass", "111")
        .await
        .unwrap();
    let pair = service.login("alice@example.com", "s3cret-pass").await.unwrap();

    clock.advance(Duration::seconds(60));
    let refreshed = service.refresh(&pair.refresh_token).await.unwrap();
    assert_ne!(refreshed.access_token, pair.access_token);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let (service, _users, _clock) = auth_service();
    service
        .register("Alice", "alice@example.com", "s3cret-pass", "111")
        .await
        .unwrap();
    let pair = service.login("alice@example.com", "s3cret-pass").await.unwrap();

    let err = service.refresh(&pair.access_token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::BadSignature)
    ));
}

#[tokio::test]
async fn test_refresh_fails_after_account_deleted() {
    let (service, users, _clock) = auth_service();
    let user = service
        .register("Alice", "alice@example.com", "s3cret-pass", "111")
        .await
        .unwrap();
    let pair = service.login("alice@example.com", "s3cret-pass").await.unwrap();

    users.delete(user.id).await.unwrap();

    let err = service.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::UnknownSubject { .. })
    ));
}

#[tokio::test]
async fn test_refresh_picks_up_role_change() {
    let (service, users, clock) = auth_service();
    let mut user = service
        .register("Alice", "alice@example.com", "s3cret-pass", "111")
        .await
        .unwrap();
    let pair = service.login("alice@example.com", "s3cret-pass").await.unwrap();

    user.role = Role::Admin;
    users.update(user).await.unwrap();

    let refreshed = service.refresh(&pair.refresh_token).await.unwrap();
    let tokens = super::token_service(clock);
    let claims = tokens
        .validate(&refreshed.access_token, KeyClass::Access)
        .unwrap();
    assert_eq!(claims.role, Some(Role::Admin));
}

#[tokio::test]
async fn test_expired_refresh_token_is_rejected() {
    let (service, _users, clock) = auth_service();
    service
        .register("Alice", "alice@example.com", "s3cret-pass", "111")
        .await
        .unwrap();
    let pair = service.login("alice@example.com", "s3cret-pass").await.unwrap();

    clock.advance(Duration::seconds(604_800));
    let err = service.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[tokio::test]
async fn test_current_user_resolves_subject() {
    let (service, _users, clock) = auth_service();
    service
        .register("Alice", "alice@example.com", "s3cret-pass", "111")
        .await
        .unwrap();
    let pair = service.login("alice@example.com", "s3cret-pass").await.unwrap();

    let tokens = super::token_service(clock);
    let claims = tokens.validate(&pair.access_token, KeyClass::Access).unwrap();
    let user = service.current_user(&claims).await.unwrap();
    assert_eq!(user.email, "alice@example.com");
}

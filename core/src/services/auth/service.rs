//! Registration, login, and token refresh.

use std::sync::Arc;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, EntityError};
use crate::repositories::user::r#trait::UserRepository;
use crate::services::token::{KeyClass, TokenService};

use super::identity::IdentityResolver;

/// Service handling account registration and credential-based authentication
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    identity: IdentityResolver,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Creates a new authentication service
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        let identity = IdentityResolver::new(Arc::clone(&users));
        Self {
            users,
            identity,
            tokens,
        }
    }

    /// Registers a new account with the default role
    ///
    /// The password is bcrypt-hashed before it reaches the store.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> Result<User, DomainError> {
        if self.users.exists_by_email(email).await? {
            return Err(EntityError::UserAlreadyExists {
                email: email.to_string(),
            }
            .into());
        }

        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })?;

        self.users
            .create(User::new(name, email, password_hash, phone))
            .await
    }

    /// Authenticates credentials and issues a token pair
    ///
    /// Unknown email and wrong password produce the same error; the response
    /// must not reveal which part of the credential was wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, DomainError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            })?;
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.tokens.issue_pair(&user.email, user.role)
    }

    /// Exchanges a refresh token for a fresh token pair
    ///
    /// The role is re-derived from the user store rather than trusted from
    /// the presented token, so a role change takes effect on the next
    /// refresh.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, DomainError> {
        let claims = self.tokens.validate(refresh_token, KeyClass::Refresh)?;
        let user = self.identity.resolve(&claims.sub).await?;
        self.tokens.issue_pair(&user.email, user.role)
    }

    /// Returns the account behind a set of verified claims
    pub async fn current_user(&self, claims: &Claims) -> Result<User, DomainError> {
        self.identity.resolve(&claims.sub).await
    }
}

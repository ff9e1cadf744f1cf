//! Account listing, lookup, and profile updates.

use std::sync::Arc;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, EntityError, ValidationError};
use crate::repositories::user::r#trait::UserRepository;
use crate::services::auth::AuthorizationGuard;

/// Service handling user account management
///
/// Profile updates follow the owner-or-admin rule. The email is immutable:
/// it is the token subject, and changing it would orphan every outstanding
/// token for the account.
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Lists all accounts
    pub async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.users.find_all().await
    }

    /// Finds an account by id
    pub async fn find_by_id(&self, id: i64) -> Result<User, DomainError> {
        if id <= 0 {
            return Err(ValidationError::InvalidId { id }.into());
        }
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| EntityError::UserNotFound { id }.into())
    }

    /// Updates an account's profile, patching whichever fields are given
    ///
    /// Only the account owner or an administrator may update. A new password
    /// is re-hashed before it reaches the store.
    pub async fn update(
        &self,
        claims: &Claims,
        id: i64,
        name: Option<&str>,
        phone: Option<&str>,
        password: Option<&str>,
    ) -> Result<User, DomainError> {
        let mut user = self.find_by_id(id).await?;
        AuthorizationGuard::authorize_owner_action(Some(claims), &user.email)?;

        if let Some(name) = name {
            user.name = name.to_string();
        }
        if let Some(phone) = phone {
            user.phone = phone.to_string();
        }
        if let Some(password) = password {
            user.password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| {
                DomainError::Internal {
                    message: format!("Password hashing failed: {}", e),
                }
            })?;
        }

        self.users.update(user).await
    }

    /// Deletes an account
    ///
    /// Only the account owner or an administrator may delete.
    pub async fn delete(&self, claims: &Claims, id: i64) -> Result<(), DomainError> {
        let user = self.find_by_id(id).await?;
        AuthorizationGuard::authorize_owner_action(Some(claims), &user.email)?;

        if !self.users.delete(id).await? {
            return Err(EntityError::UserNotFound { id }.into());
        }
        Ok(())
    }
}

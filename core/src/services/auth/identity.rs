//! Resolution of token subjects to stored user accounts.

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::r#trait::UserRepository;

/// Maps a validated token subject to the user account it names
///
/// A token can outlive its account: the user may have been deleted after the
/// token was issued. Resolution therefore goes through the user store on
/// every request, and a missing subject is an authentication failure rather
/// than a server fault.
#[derive(Clone)]
pub struct IdentityResolver {
    users: Arc<dyn UserRepository>,
}

impl IdentityResolver {
    /// Creates a new resolver backed by the given user store
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Resolves a token subject (email) to its user account
    ///
    /// # Returns
    /// * `Ok(User)` - The account the subject names
    /// * `Err(DomainError::Auth(AuthError::UnknownSubject))` - No such account
    pub async fn resolve(&self, subject: &str) -> Result<User, DomainError> {
        self.users
            .find_by_email(subject)
            .await?
            .ok_or_else(|| {
                AuthError::UnknownSubject {
                    subject: subject.to_string(),
                }
                .into()
            })
    }
}

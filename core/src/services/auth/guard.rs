//! Owner-or-admin authorization checks.

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::Role;
use crate::errors::{AuthError, DomainError};

/// Authorization decisions over verified claims
///
/// All checks fail closed: absent claims are denied, and every denial is the
/// same `Forbidden` error regardless of cause.
pub struct AuthorizationGuard;

impl AuthorizationGuard {
    /// Allows an action on a resource owned by `owner_email`
    ///
    /// Permitted when the caller is an administrator or when the claims
    /// subject matches the owner. Anything else is denied.
    pub fn authorize_owner_action(
        claims: Option<&Claims>,
        owner_email: &str,
    ) -> Result<(), DomainError> {
        let claims = claims.ok_or(AuthError::Forbidden)?;
        if claims.role == Some(Role::Admin) || claims.sub == owner_email {
            Ok(())
        } else {
            Err(AuthError::Forbidden.into())
        }
    }

    /// Allows an action reserved for administrators
    pub fn require_admin(claims: Option<&Claims>) -> Result<(), DomainError> {
        let claims = claims.ok_or(AuthError::Forbidden)?;
        if claims.role == Some(Role::Admin) {
            Ok(())
        } else {
            Err(AuthError::Forbidden.into())
        }
    }
}

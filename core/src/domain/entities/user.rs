//! User entity and role definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::User => write!(f, "USER"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// User account entity
///
/// The email is unique and doubles as the token subject. The password is
/// stored as a bcrypt hash, never in plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database identifier (assigned on insert)
    pub id: i64,

    /// Display name
    pub name: String,

    /// Unique email address, used as the authentication subject
    pub email: String,

    /// Bcrypt hash of the password
    pub password_hash: String,

    /// Contact phone number
    pub phone: String,

    /// Account role
    pub role: Role,
}

impl User {
    /// Creates a new unsaved user with the default `USER` role
    ///
    /// The id is assigned by the repository on insert.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            phone: phone.into(),
            role: Role::User,
        }
    }

    /// Whether this account carries the administrator role
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

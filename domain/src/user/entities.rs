//! User entity

use crate::core::error::DomainError;
use crate::user::value_objects::{PasswordHash, UserEmail, UserId, UserRole};
use serde::Serialize;

/// A registered user
///
/// Holds only the password hash; plaintext handling lives behind the
/// credential ports in the application layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: UserEmail,
    pub password: PasswordHash,
    pub role: UserRole,
}

/// The externally visible shape of a user (no credentials)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: UserEmail,
    pub role: UserRole,
}

impl User {
    /// Create a user from validated parts
    ///
    /// The name is trimmed and lowercased; an empty name is rejected.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: PasswordHash,
        role: UserRole,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "User name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: UserId::new(id)?,
            name: name.to_lowercase(),
            email: UserEmail::new(email)?,
            password,
            role,
        })
    }

    /// Credential-free view of this user
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

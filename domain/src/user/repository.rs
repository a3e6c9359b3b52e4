//! User repository port

use crate::core::error::RepositoryError;
use crate::user::entities::User;
use crate::user::value_objects::{UserEmail, UserId};
use async_trait::async_trait;

/// Persistence port for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user (insert or replace)
    async fn save(&self, user: User) -> Result<(), RepositoryError>;

    /// Look up a user by id
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Look up a user by (normalized) email
    async fn find_by_email(&self, email: &UserEmail) -> Result<Option<User>, RepositoryError>;

    /// All stored users
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
}

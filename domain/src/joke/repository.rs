//! Joke repository port

use crate::core::error::RepositoryError;
use crate::joke::entities::Joke;
use crate::joke::value_objects::{CategoryId, JokeId};
use crate::user::value_objects::UserId;
use async_trait::async_trait;

/// Persistence port for jokes
///
/// The backing store is an infrastructure concern; implementations must be
/// safe to share across concurrent use cases.
#[async_trait]
pub trait JokeRepository: Send + Sync {
    /// Persist a new joke
    async fn save(&self, joke: Joke) -> Result<(), RepositoryError>;

    /// Look up a joke by id
    async fn find_by_id(&self, id: &JokeId) -> Result<Option<Joke>, RepositoryError>;

    /// All stored jokes
    async fn find_all(&self) -> Result<Vec<Joke>, RepositoryError>;

    /// Jokes authored by a user
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Joke>, RepositoryError>;

    /// Jokes in a category
    async fn find_by_category_id(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Joke>, RepositoryError>;

    /// Jokes authored by a user within a category
    async fn find_by_user_and_category(
        &self,
        user_id: &UserId,
        category_id: &CategoryId,
    ) -> Result<Vec<Joke>, RepositoryError>;

    /// Replace an existing joke; `NotFound` if the id is unknown
    async fn update(&self, joke: Joke) -> Result<(), RepositoryError>;

    /// Remove a joke; `NotFound` if the id is unknown
    async fn delete(&self, id: &JokeId) -> Result<(), RepositoryError>;
}

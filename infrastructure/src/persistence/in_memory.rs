//! In-memory repositories
//!
//! Map-backed stores for tests and local runs. The production database
//! adapter is a separate deployment concern; these implement the same
//! repository ports.

use async_trait::async_trait;
use jokehub_domain::{
    CategoryId, Joke, JokeId, JokeRepository, RepositoryError, User, UserEmail, UserId,
    UserRepository,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Joke store backed by a `HashMap`
#[derive(Default)]
pub struct InMemoryJokeRepository {
    jokes: RwLock<HashMap<String, Joke>>,
}

impl InMemoryJokeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JokeRepository for InMemoryJokeRepository {
    async fn save(&self, joke: Joke) -> Result<(), RepositoryError> {
        self.jokes
            .write()
            .await
            .insert(joke.id.as_str().to_string(), joke);
        Ok(())
    }

    async fn find_by_id(&self, id: &JokeId) -> Result<Option<Joke>, RepositoryError> {
        Ok(self.jokes.read().await.get(id.as_str()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Joke>, RepositoryError> {
        let mut all: Vec<Joke> = self.jokes.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Joke>, RepositoryError> {
        let mut jokes = self.find_all().await?;
        jokes.retain(|j| &j.user_id == user_id);
        Ok(jokes)
    }

    async fn find_by_category_id(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Joke>, RepositoryError> {
        let mut jokes = self.find_all().await?;
        jokes.retain(|j| &j.category_id == category_id);
        Ok(jokes)
    }

    async fn find_by_user_and_category(
        &self,
        user_id: &UserId,
        category_id: &CategoryId,
    ) -> Result<Vec<Joke>, RepositoryError> {
        let mut jokes = self.find_all().await?;
        jokes.retain(|j| &j.user_id == user_id && &j.category_id == category_id);
        Ok(jokes)
    }

    async fn update(&self, joke: Joke) -> Result<(), RepositoryError> {
        let mut jokes = self.jokes.write().await;
        let key = joke.id.as_str().to_string();
        if !jokes.contains_key(&key) {
            return Err(RepositoryError::NotFound(key));
        }
        jokes.insert(key, joke);
        Ok(())
    }

    async fn delete(&self, id: &JokeId) -> Result<(), RepositoryError> {
        self.jokes
            .write()
            .await
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(id.as_str().to_string()))
    }
}

/// User store backed by a `HashMap`
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> Result<(), RepositoryError> {
        self.users
            .write()
            .await
            .insert(user.id.as_str().to_string(), user);
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().await.get(id.as_str()).cloned())
    }

    async fn find_by_email(&self, email: &UserEmail) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.read().await.values().cloned().collect())
    }
}

//! Shared mocks for use case tests

use async_trait::async_trait;
use jokehub_domain::{
    CategoryId, Joke, JokeId, JokeRepository, RepositoryError, UserId,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory joke repository for exercising use cases in isolation
pub(crate) struct RecordingJokeRepository {
    jokes: Mutex<HashMap<String, Joke>>,
}

impl RecordingJokeRepository {
    pub(crate) fn new() -> Self {
        Self {
            jokes: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn with_jokes(jokes: impl IntoIterator<Item = Joke>) -> Self {
        Self {
            jokes: Mutex::new(
                jokes
                    .into_iter()
                    .map(|j| (j.id.as_str().to_string(), j))
                    .collect(),
            ),
        }
    }

    pub(crate) fn get(&self, id: &str) -> Option<Joke> {
        self.jokes.lock().unwrap().get(id).cloned()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.jokes.lock().unwrap().is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.jokes.lock().unwrap().len()
    }
}

#[async_trait]
impl JokeRepository for RecordingJokeRepository {
    async fn save(&self, joke: Joke) -> Result<(), RepositoryError> {
        self.jokes
            .lock()
            .unwrap()
            .insert(joke.id.as_str().to_string(), joke);
        Ok(())
    }

    async fn find_by_id(&self, id: &JokeId) -> Result<Option<Joke>, RepositoryError> {
        Ok(self.jokes.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Joke>, RepositoryError> {
        let mut all: Vec<Joke> = self.jokes.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Joke>, RepositoryError> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|j| &j.user_id == user_id)
            .collect())
    }

    async fn find_by_category_id(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Joke>, RepositoryError> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|j| &j.category_id == category_id)
            .collect())
    }

    async fn find_by_user_and_category(
        &self,
        user_id: &UserId,
        category_id: &CategoryId,
    ) -> Result<Vec<Joke>, RepositoryError> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|j| &j.user_id == user_id && &j.category_id == category_id)
            .collect())
    }

    async fn update(&self, joke: Joke) -> Result<(), RepositoryError> {
        let mut jokes = self.jokes.lock().unwrap();
        let key = joke.id.as_str().to_string();
        if !jokes.contains_key(&key) {
            return Err(RepositoryError::NotFound(key));
        }
        jokes.insert(key, joke);
        Ok(())
    }

    async fn delete(&self, id: &JokeId) -> Result<(), RepositoryError> {
        self.jokes
            .lock()
            .unwrap()
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(id.as_str().to_string()))
    }
}

/// Build a joke with the given parts and current timestamps
pub(crate) fn joke(id: &str, text: &str, user_id: &str, category_id: &str) -> Joke {
    let now = chrono::Utc::now();
    Joke::new(id, text, user_id, category_id, now, now).unwrap()
}

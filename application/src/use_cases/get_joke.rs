//! Get Joke use case

use jokehub_domain::{DomainError, Joke, JokeId, JokeRepository, RepositoryError};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while looking up a joke
#[derive(Error, Debug)]
pub enum GetJokeError {
    #[error("Joke with id {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Use case fetching a single joke by id
pub struct GetJoke {
    repository: Arc<dyn JokeRepository>,
}

impl GetJoke {
    pub fn new(repository: Arc<dyn JokeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> Result<Joke, GetJokeError> {
        let joke_id = JokeId::new(id)?;
        self.repository
            .find_by_id(&joke_id)
            .await?
            .ok_or_else(|| GetJokeError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{RecordingJokeRepository, joke};

    #[tokio::test]
    async fn returns_stored_joke() {
        let repository = Arc::new(RecordingJokeRepository::with_jokes([joke(
            "joke-1", "text", "user-1", "cat-1",
        )]));
        let use_case = GetJoke::new(repository as Arc<dyn JokeRepository>);

        let found = use_case.execute("joke-1").await.unwrap();
        assert_eq!(found.text.as_str(), "text");
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let repository = Arc::new(RecordingJokeRepository::new());
        let use_case = GetJoke::new(repository as Arc<dyn JokeRepository>);

        let err = use_case.execute("missing").await.unwrap_err();
        assert!(matches!(err, GetJokeError::NotFound(id) if id == "missing"));
    }
}

//! Delete Joke use case

use jokehub_domain::{DomainError, JokeId, JokeRepository, RepositoryError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while deleting a joke
#[derive(Error, Debug)]
pub enum DeleteJokeError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Use case removing a joke by id
pub struct DeleteJoke {
    repository: Arc<dyn JokeRepository>,
}

impl DeleteJoke {
    pub fn new(repository: Arc<dyn JokeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> Result<(), DeleteJokeError> {
        let id = JokeId::new(id)?;
        self.repository.delete(&id).await?;
        info!(joke_id = %id, "Joke deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{RecordingJokeRepository, joke};

    #[tokio::test]
    async fn deletes_an_existing_joke() {
        let repository = Arc::new(RecordingJokeRepository::with_jokes([joke(
            "joke-1", "text", "user-1", "cat-1",
        )]));
        let use_case = DeleteJoke::new(Arc::clone(&repository) as Arc<dyn JokeRepository>);

        use_case.execute("joke-1").await.unwrap();
        assert!(repository.is_empty());
    }

    #[tokio::test]
    async fn deleting_a_missing_joke_surfaces_not_found() {
        let repository = Arc::new(RecordingJokeRepository::new());
        let use_case = DeleteJoke::new(repository as Arc<dyn JokeRepository>);

        let err = use_case.execute("missing").await.unwrap_err();
        assert!(matches!(
            err,
            DeleteJokeError::Repository(RepositoryError::NotFound(_))
        ));
    }
}

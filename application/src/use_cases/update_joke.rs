//! Update Joke use case

use jokehub_domain::{DomainError, Joke, JokeId, JokeRepository, RepositoryError};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while updating a joke
#[derive(Error, Debug)]
pub enum UpdateJokeError {
    #[error("Joke with id {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Input for [`UpdateJoke`]
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateJokeRequest {
    pub id: String,
    pub text: String,
}

/// Use case replacing the text of an existing joke
pub struct UpdateJoke {
    repository: Arc<dyn JokeRepository>,
}

impl UpdateJoke {
    pub fn new(repository: Arc<dyn JokeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: UpdateJokeRequest) -> Result<Joke, UpdateJokeError> {
        let id = JokeId::new(&request.id)?;

        let existing = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| UpdateJokeError::NotFound(request.id.clone()))?;

        let updated = existing.with_text(request.text)?;
        self.repository.update(updated.clone()).await?;
        info!(joke_id = %updated.id, "Joke updated");

        Ok(updated)
    }
}

//! Create Joke use case

use chrono::Utc;
use jokehub_domain::{DomainError, Joke, JokeRepository, RepositoryError};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors that can occur while creating a joke
#[derive(Error, Debug)]
pub enum CreateJokeError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Input for [`CreateJoke`]
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJokeRequest {
    pub text: String,
    pub user_id: String,
    pub category_id: String,
}

/// Use case creating a joke with a generated id and current timestamps
pub struct CreateJoke {
    repository: Arc<dyn JokeRepository>,
}

impl CreateJoke {
    pub fn new(repository: Arc<dyn JokeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: CreateJokeRequest) -> Result<Joke, CreateJokeError> {
        let now = Utc::now();
        let joke = Joke::new(
            Uuid::new_v4().to_string(),
            request.text,
            request.user_id,
            request.category_id,
            now,
            now,
        )?;

        self.repository.save(joke.clone()).await?;
        info!(joke_id = %joke.id, "Joke created");

        Ok(joke)
    }
}

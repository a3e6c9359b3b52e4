//! Get Jokes use case

use jokehub_domain::{
    CategoryId, DomainError, Joke, JokeRepository, RepositoryError, UserId,
};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while listing jokes
#[derive(Error, Debug)]
pub enum GetJokesError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Optional filters for a joke listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JokeQuery {
    pub user_id: Option<String>,
    pub category_id: Option<String>,
}

/// Use case listing jokes, optionally filtered by author and/or category
pub struct GetJokes {
    repository: Arc<dyn JokeRepository>,
}

impl GetJokes {
    pub fn new(repository: Arc<dyn JokeRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, query: JokeQuery) -> Result<Vec<Joke>, GetJokesError> {
        let user_id = query.user_id.map(UserId::new).transpose()?;
        let category_id = query.category_id.map(CategoryId::new).transpose()?;

        let jokes = match (user_id, category_id) {
            (Some(user), Some(category)) => {
                self.repository
                    .find_by_user_and_category(&user, &category)
                    .await?
            }
            (Some(user), None) => self.repository.find_by_user_id(&user).await?,
            (None, Some(category)) => self.repository.find_by_category_id(&category).await?,
            (None, None) => self.repository.find_all().await?,
        };

        Ok(jokes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{RecordingJokeRepository, joke};

    fn repository() -> Arc<RecordingJokeRepository> {
        Arc::new(RecordingJokeRepository::with_jokes([
            joke("j-1", "one", "user-1", "cat-1"),
            joke("j-2", "two", "user-1", "cat-2"),
            joke("j-3", "three", "user-2", "cat-1"),
        ]))
    }

    #[tokio::test]
    async fn no_filters_returns_everything() {
        let use_case = GetJokes::new(repository() as Arc<dyn JokeRepository>);
        let jokes = use_case.execute(JokeQuery::default()).await.unwrap();
        assert_eq!(jokes.len(), 3);
    }

    #[tokio::test]
    async fn filters_by_user() {
        let use_case = GetJokes::new(repository() as Arc<dyn JokeRepository>);
        let jokes = use_case
            .execute(JokeQuery {
                user_id: Some("user-1".to_string()),
                category_id: None,
            })
            .await
            .unwrap();
        assert_eq!(jokes.len(), 2);
        assert!(jokes.iter().all(|j| j.user_id.as_str() == "user-1"));
    }

    #[tokio::test]
    async fn filters_by_category() {
        let use_case = GetJokes::new(repository() as Arc<dyn JokeRepository>);
        let jokes = use_case
            .execute(JokeQuery {
                user_id: None,
                category_id: Some("cat-1".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(jokes.len(), 2);
    }

    #[tokio::test]
    async fn filters_by_user_and_category() {
        let use_case = GetJokes::new(repository() as Arc<dyn JokeRepository>);
        let jokes = use_case
            .execute(JokeQuery {
                user_id: Some("user-1".to_string()),
                category_id: Some("cat-1".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(jokes.len(), 1);
        assert_eq!(jokes[0].id.as_str(), "j-1");
    }

    #[tokio::test]
    async fn empty_filter_value_is_a_domain_error() {
        let use_case = GetJokes::new(repository() as Arc<dyn JokeRepository>);
        let err = use_case
            .execute(JokeQuery {
                user_id: Some("".to_string()),
                category_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GetJokesError::Domain(_)));
    }
}

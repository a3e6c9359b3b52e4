//! Fetch External Joke use case
//!
//! Fetches a single joke from one of the configured upstream sources,
//! selected by kind.

use crate::ports::joke_source::{JokeSource, SourceError};
use jokehub_domain::JokeText;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while fetching a single external joke
#[derive(Error, Debug)]
pub enum FetchExternalJokeError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Use case dispatching a fetch to the source named by `kind`
pub struct FetchExternalJoke {
    chuck_source: Arc<dyn JokeSource>,
    dad_source: Arc<dyn JokeSource>,
}

impl FetchExternalJoke {
    pub fn new(chuck_source: Arc<dyn JokeSource>, dad_source: Arc<dyn JokeSource>) -> Self {
        Self {
            chuck_source,
            dad_source,
        }
    }

    /// Fetch one joke from the source selected by `kind`
    ///
    /// `kind` is matched case-insensitively against `"chuck"` and `"dad"`.
    pub async fn execute(&self, kind: &str) -> Result<JokeText, FetchExternalJokeError> {
        let source = match kind.to_lowercase().as_str() {
            "chuck" => &self.chuck_source,
            "dad" => &self.dad_source,
            _ => {
                return Err(FetchExternalJokeError::Validation(
                    "Invalid joke type. Must be \"chuck\" or \"dad\"".to_string(),
                ));
            }
        };

        debug!("Fetching external joke from {}", source.name());
        Ok(source.random_joke().await?)
    }
}

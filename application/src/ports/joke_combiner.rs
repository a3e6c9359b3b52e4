//! Joke combiner port
//!
//! Defines the interface for merging two jokes into one via a
//! generative-text service. Unlike the joke sources, combining is a single
//! attempt: the call is comparatively expensive and not safe to retry
//! blindly.

use async_trait::async_trait;
use jokehub_domain::JokeText;
use thiserror::Error;

/// Errors that can occur while combining two jokes
#[derive(Error, Debug)]
pub enum CombinerError {
    /// An input joke was empty; checked before any network I/O.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The service answered, but the response had no usable text content.
    #[error("Invalid response from combiner service: {0}")]
    Protocol(String),

    /// The service explicitly reported a request-level failure.
    #[error("Combiner service error: {status} {body}")]
    Upstream { status: u16, body: String },

    /// Transport-level failure (connect, timeout, ...).
    #[error("Combiner transport error: {0}")]
    Transport(String),
}

/// Merges two jokes into a single derived joke
#[async_trait]
pub trait JokeCombiner: Send + Sync {
    /// Combine `joke_a` and `joke_b` into one joke
    ///
    /// Both inputs must be non-empty after trimming; violations fail with
    /// [`CombinerError::Validation`] without touching the network.
    async fn combine(&self, joke_a: &str, joke_b: &str) -> Result<JokeText, CombinerError>;
}

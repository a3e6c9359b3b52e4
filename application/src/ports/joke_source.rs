//! Joke source port
//!
//! Defines the interface for fetching single jokes from an upstream
//! provider. Adapters own their retry policy: by the time a `SourceError`
//! surfaces here, the adapter has already exhausted its budget.

use async_trait::async_trait;
use jokehub_domain::JokeText;
use std::fmt;

/// Errors that can occur while fetching from an upstream joke source
#[derive(Debug)]
pub enum SourceError {
    /// The upstream answered, but with an unexpected shape. Not transient;
    /// adapters must not retry it.
    Protocol { source: String, reason: String },

    /// Transient failures persisted past the adapter's retry budget.
    ExhaustedRetries { source: String, attempts: u32 },
}

// `Display`/`Error` are implemented by hand rather than via `thiserror`:
// the spec mandates a field named `source` carrying the source *name*
// (a `String`), but `thiserror` reserves `source` for an underlying
// `std::error::Error`. The messages below mirror the original `#[error(..)]`
// strings verbatim, and `Error::source` correctly returns `None`.
impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Protocol { source, reason } => {
                write!(f, "Invalid response from {source}: {reason}")
            }
            SourceError::ExhaustedRetries { source, attempts } => {
                write!(f, "Failed to fetch joke from {source} after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for SourceError {}

impl SourceError {
    /// Name of the upstream source this error originated from
    pub fn source_name(&self) -> &str {
        match self {
            SourceError::Protocol { source, .. } => source,
            SourceError::ExhaustedRetries { source, .. } => source,
        }
    }
}

/// A single upstream joke provider
///
/// Implementations are stateless between calls and safe to invoke
/// concurrently from the pairing orchestrator.
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Human-readable name of the source (used in errors and logs)
    fn name(&self) -> &str;

    /// Fetch one random joke
    async fn random_joke(&self) -> Result<JokeText, SourceError>;
}

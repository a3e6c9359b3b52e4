//! Application layer for jokehub
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer; adapters for the ports live in the infrastructure
//! layer and are injected by the composition root.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    credentials::{CredentialVerifier, TokenError, TokenIssuer},
    joke_combiner::{CombinerError, JokeCombiner},
    joke_source::{JokeSource, SourceError},
    notifier::{Channel, Notifier, NotifyError},
};
pub use use_cases::calculate_lcm::CalculateLcm;
pub use use_cases::create_joke::{CreateJoke, CreateJokeError, CreateJokeRequest};
pub use use_cases::delete_joke::{DeleteJoke, DeleteJokeError};
pub use use_cases::fetch_external_joke::{FetchExternalJoke, FetchExternalJokeError};
pub use use_cases::fetch_paired_jokes::{
    BATCH_SIZE, FetchPairedJokes, FetchPairedJokesError,
};
pub use use_cases::get_joke::{GetJoke, GetJokeError};
pub use use_cases::get_jokes::{GetJokes, GetJokesError, JokeQuery};
pub use use_cases::increment_number::IncrementNumber;
pub use use_cases::login::{Login, LoginError, LoginRequest, LoginResponse};
pub use use_cases::send_alert::{SendAlert, SendAlertError};
pub use use_cases::update_joke::{UpdateJoke, UpdateJokeError, UpdateJokeRequest};

//! Infrastructure layer for jokehub
//!
//! Adapters for the application-layer ports: upstream joke clients, the
//! generative-text combiner, in-memory repositories, notification services,
//! and configuration loading.

pub mod config;
pub mod external;
pub mod notify;
pub mod persistence;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use external::{
    AnthropicCombiner, ChuckNorrisClient, DadJokesClient, retry::RetryPolicy,
};
pub use notify::{EmailNotifier, NotifierFactory, SmsNotifier};
pub use persistence::{InMemoryJokeRepository, InMemoryUserRepository};

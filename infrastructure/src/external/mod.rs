//! Adapters for external HTTP services

pub mod anthropic;
pub mod chuck_norris;
pub mod dad_jokes;
pub mod retry;

pub use anthropic::AnthropicCombiner;
pub use chuck_norris::ChuckNorrisClient;
pub use dad_jokes::DadJokesClient;

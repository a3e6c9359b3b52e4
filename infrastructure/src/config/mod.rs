//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{CombinerConfig, FileConfig, RetryConfig, SourcesConfig};
pub use loader::ConfigLoader;

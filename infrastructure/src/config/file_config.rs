//! Configuration file schema

use crate::external::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub sources: SourcesConfig,
    pub combiner: CombinerConfig,
    pub retry: RetryConfig,
}

/// Base URLs of the upstream joke sources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub chuck_api_url: String,
    pub dad_jokes_api_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            chuck_api_url: "https://api.chucknorris.io".to_string(),
            dad_jokes_api_url: "https://icanhazdadjoke.com".to_string(),
        }
    }
}

/// Generative-text service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombinerConfig {
    /// API key; also picked up from `ANTHROPIC_API_KEY`
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for CombinerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: crate::external::anthropic::DEFAULT_BASE_URL.to_string(),
            model: crate::external::anthropic::DEFAULT_MODEL.to_string(),
            max_tokens: crate::external::anthropic::DEFAULT_MAX_TOKENS,
        }
    }
}

/// Retry budget for the joke sources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            base_delay: Duration::from_millis(self.base_delay_ms),
        }
    }
}

//! Dad jokes client

use super::retry::{RetryPolicy, Transient, with_retry};
use async_trait::async_trait;
use jokehub_application::{JokeSource, SourceError};
use jokehub_domain::JokeText;
use serde::Deserialize;
use tracing::debug;

const SOURCE_NAME: &str = "Dad Jokes API";

/// Expected response shape; the endpoint only answers JSON when asked via
/// the `Accept` header.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct DadJoke {
    id: String,
    joke: String,
    status: u16,
}

/// Client for the dad-joke source
pub struct DadJokesClient {
    http: reqwest::Client,
    url: String,
    policy: RetryPolicy,
}

impl DadJokesClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self::with_policy(http, base_url, RetryPolicy::default())
    }

    pub fn with_policy(http: reqwest::Client, base_url: &str, policy: RetryPolicy) -> Self {
        Self {
            http,
            url: base_url.trim_end_matches('/').to_string(),
            policy,
        }
    }

    async fn fetch_body(&self) -> Result<String, Transient> {
        let response = self
            .http
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Transient(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Transient(format!("HTTP {status}")));
        }

        response.text().await.map_err(|e| Transient(e.to_string()))
    }

    fn parse(body: &str) -> Result<JokeText, SourceError> {
        let joke: DadJoke = serde_json::from_str(body).map_err(|e| SourceError::Protocol {
            source: SOURCE_NAME.to_string(),
            reason: e.to_string(),
        })?;

        JokeText::new(joke.joke).map_err(|_| SourceError::Protocol {
            source: SOURCE_NAME.to_string(),
            reason: "empty joke body".to_string(),
        })
    }
}

#[async_trait]
impl JokeSource for DadJokesClient {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn random_joke(&self) -> Result<JokeText, SourceError> {
        let body = with_retry(&self.policy, SOURCE_NAME, || self.fetch_body()).await?;
        let joke = Self::parse(&body)?;
        debug!(source = SOURCE_NAME, "Fetched joke");
        Ok(joke)
    }
}

//! Chuck Norris joke client

use super::retry::{RetryPolicy, Transient, with_retry};
use async_trait::async_trait;
use jokehub_application::{JokeSource, SourceError};
use jokehub_domain::JokeText;
use serde::Deserialize;
use tracing::debug;

const SOURCE_NAME: &str = "Chuck Norris API";
const RANDOM_JOKE_PATH: &str = "/jokes/random";

/// Expected response shape of the random-joke endpoint
///
/// Every field is required; a body missing any of them is a protocol
/// violation, not a transient failure.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ChuckNorrisJoke {
    icon_url: String,
    id: String,
    url: String,
    value: String,
}

/// Client for the Chuck Norris joke source
///
/// Stateless between calls; the `reqwest::Client` handle is shared with the
/// rest of the process and cheap to clone.
pub struct ChuckNorrisClient {
    http: reqwest::Client,
    url: String,
    policy: RetryPolicy,
}

impl ChuckNorrisClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self::with_policy(http, base_url, RetryPolicy::default())
    }

    pub fn with_policy(http: reqwest::Client, base_url: &str, policy: RetryPolicy) -> Self {
        Self {
            http,
            url: format!("{}{}", base_url.trim_end_matches('/'), RANDOM_JOKE_PATH),
            policy,
        }
    }

    /// One GET attempt; anything short of a readable 2xx body is transient
    async fn fetch_body(&self) -> Result<String, Transient> {
        let response = self
            .http
            .get(&self.url)
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
        let joke: ChuckNorrisJoke =
            serde_json::from_str(body).map_err(|e| SourceError::Protocol {
                source: SOURCE_NAME.to_string(),
                reason: e.to_string(),
            })?;

        JokeText::new(joke.value).map_err(|_| SourceError::Protocol {
            source: SOURCE_NAME.to_string(),
            reason: "empty joke body".to_string(),
        })
    }
}

#[async_trait]
impl JokeSource for ChuckNorrisClient {
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

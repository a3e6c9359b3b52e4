//! Joke combiner backed by the Anthropic Messages API

use async_trait::async_trait;
use jokehub_application::{CombinerError, JokeCombiner};
use jokehub_domain::JokeText;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 300;

const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<MessageParam<'a>>,
}

#[derive(Debug, Serialize)]
struct MessageParam<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
}

/// Content blocks in a Messages API response; only text blocks are usable
/// here, anything else is skipped.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Combiner adapter calling the Messages API over HTTP
///
/// Deliberately single-attempt: generation is expensive and not safe to
/// retry blindly, unlike the idempotent joke fetches.
pub struct AnthropicCombiner {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicCombiner {
    pub fn new(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_options(
        http: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
        }
    }

    fn prompt(joke_a: &str, joke_b: &str) -> String {
        format!(
            "You are a creative comedian. Your task is to combine two jokes into one \
             hilarious, creative joke that incorporates elements from both.\n\n\
             Chuck Norris Joke: \"{joke_a}\"\n\
             Dad Joke: \"{joke_b}\"\n\n\
             Create a single, creative joke that cleverly combines both jokes. \
             Be witty and creative. Return only the combined joke, no explanations."
        )
    }

    fn extract_text(body: &str) -> Result<JokeText, CombinerError> {
        let response: MessagesResponse =
            serde_json::from_str(body).map_err(|e| CombinerError::Protocol(e.to_string()))?;

        let text = response
            .content
            .iter()
            .find_map(|block| match block {
                ResponseBlock::Text { text } => Some(text.as_str()),
                ResponseBlock::Other => None,
            })
            .ok_or_else(|| {
                CombinerError::Protocol("response contains no text content".to_string())
            })?;

        JokeText::new(text)
            .map_err(|_| CombinerError::Protocol("empty completion".to_string()))
    }
}

#[async_trait]
impl JokeCombiner for AnthropicCombiner {
    async fn combine(&self, joke_a: &str, joke_b: &str) -> Result<JokeText, CombinerError> {
        if joke_a.trim().is_empty() {
            return Err(CombinerError::Validation(
                "Chuck joke cannot be empty".to_string(),
            ));
        }
        if joke_b.trim().is_empty() {
            return Err(CombinerError::Validation(
                "Dad joke cannot be empty".to_string(),
            ));
        }

        let prompt = Self::prompt(joke_a, joke_b);
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![MessageParam {
                role: "user",
                content: &prompt,
            }],
        };

        debug!(model = %self.model, "Requesting joke combination");
        let response = self
            .http
            .post(format!("{}{}", self.base_url, MESSAGES_PATH))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| CombinerError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CombinerError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(CombinerError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Self::extract_text(&body)
    }
}

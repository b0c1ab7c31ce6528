//! OpenAI-compatible chat-completions speech provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::speech::config::SpeechConfig;
use crate::speech::prompt::{build_prompt, system_prompt, truncate, MAX_SPEECH_CHARS};
use crate::speech::{SpeechContext, SpeechError, SpeechProvider, SpeechTopic};

const MAX_TOKENS: u32 = 160;
const VOTE_TEMPERATURE: f64 = 0.6;
const DISCUSSION_TEMPERATURE: f64 = 0.85;

#[derive(Clone)]
pub struct HttpSpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl HttpSpeechProvider {
    pub const NAME: &'static str = "gpt";

    pub fn new(config: SpeechConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, config }
    }

    pub fn from_env() -> Self {
        Self::new(SpeechConfig::from_env())
    }

    pub fn config(&self) -> &SpeechConfig {
        &self.config
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f64,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl SpeechProvider for HttpSpeechProvider {
    async fn generate_speech(&self, ctx: &SpeechContext) -> Result<String, SpeechError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(SpeechError::Unconfigured)?;

        let temperature = match ctx.topic {
            SpeechTopic::Vote => VOTE_TEMPERATURE,
            SpeechTopic::Discussion => DISCUSSION_TEMPERATURE,
        };
        let request = ChatRequest {
            model: &self.config.model,
            temperature,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt(ctx.language).to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(ctx),
                },
            ],
        };

        debug!(model = %self.config.model, speaker = %ctx.speaker.id, "Requesting speech");

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout
                } else {
                    SpeechError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::RequestFailed(format!("{status}: {body}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(SpeechError::EmptyResponse);
        }
        Ok(truncate(&text, MAX_SPEECH_CHARS))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

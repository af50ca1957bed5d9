pub mod interpreter;
pub mod models;

use async_trait::async_trait;
use common::config::OpenRouterConfig;
use common::{HeadlineClassifier, NewsError, NewsResult};
use models::{ChatMessage, ChatRequest};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

pub use interpreter::{ClassificationResult, Verdict};

pub const SYSTEM_PROMPT: &str = "You are a positivity filter. Answer with one line 'POSITIVE' or 'NEGATIVE'. \
If POSITIVE, on next lines give a 1-2 sentence uplifting rewrite of the news (keep facts).";

/// Builds the user turn for one headline.
pub fn build_prompt(title: &str, description: Option<&str>, source: &str) -> String {
    format!(
        "TITLE: {}\nDESC: {}\nSOURCE: {}\n\nIs this POSITIVE or NEGATIVE? If POSITIVE, give a short uplifting rewrite (1-2 sentences).",
        title,
        description.unwrap_or_default(),
        source
    )
}

pub struct OpenRouterClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenRouterClient {
    pub fn new(config: &OpenRouterConfig) -> NewsResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(NewsError::HttpRequest)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Sends one system+user conversation and returns the decoded reply.
    ///
    /// Any status code is accepted. A body that is not JSON comes back as
    /// `{"error": "bad response", "status_code": .., "text": ..}`; only
    /// transport failures are errors.
    pub async fn chat_completion(&self, prompt: &str) -> NewsResult<Value> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };
        debug!("POST {} model={}", url, self.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Chat completion returned {} with a non-JSON body: {}", status, e);
                Ok(json!({
                    "error": "bad response",
                    "status_code": status.as_u16(),
                    "text": text,
                }))
            }
        }
    }
}

#[async_trait]
impl HeadlineClassifier for OpenRouterClient {
    async fn classify(&self, prompt: &str) -> NewsResult<Value> {
        self.chat_completion(prompt).await
    }

    fn name(&self) -> &'static str {
        "OpenRouter"
    }
}

use std::env;
use std::time::Duration;

use anyhow::Result;

use crate::secrets::Secrets;

pub const NEWS_API_KEY: &str = "NEWS_API_KEY";
pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";

#[derive(Debug, Clone)]
pub struct NewsApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub news_api: NewsApiConfig,
    pub openrouter: OpenRouterConfig,
}

impl Config {
    /// Builds the configuration from the secrets file, falling back to the
    /// process environment for every key.
    pub fn from_env(secrets: &Secrets) -> Result<Self> {
        Self::from_lookup(secrets, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(secrets: &Secrets, env_lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| {
            secrets
                .get(key)
                .map(str::to_string)
                .or_else(|| env_lookup(key))
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let news_api_key = lookup(NEWS_API_KEY);
        let openrouter_api_key = lookup(OPENROUTER_API_KEY);

        let (news_api_key, openrouter_api_key) = match (news_api_key, openrouter_api_key) {
            (Some(news), Some(router)) => (news, router),
            (news, router) => {
                let missing: Vec<&str> = [
                    (news.is_none(), NEWS_API_KEY),
                    (router.is_none(), OPENROUTER_API_KEY),
                ]
                .into_iter()
                .filter_map(|(is_missing, name)| is_missing.then_some(name))
                .collect();
                anyhow::bail!("missing API keys: {}", missing.join(", "));
            }
        };

        let secs = |key: &str, default: u64| {
            Duration::from_secs(
                lookup(key)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(default),
            )
        };

        Ok(Config {
            news_api: NewsApiConfig {
                api_key: news_api_key,
                base_url: lookup("NEWS_API_BASE_URL")
                    .unwrap_or_else(|| "https://newsapi.org/v2".to_string())
                    .trim_end_matches('/')
                    .to_string(),
                timeout: secs("NEWS_API_TIMEOUT_SECS", 10),
            },
            openrouter: OpenRouterConfig {
                api_key: openrouter_api_key,
                base_url: lookup("OPENROUTER_BASE_URL")
                    .unwrap_or_else(|| "https://openrouter.ai/api/v1".to_string())
                    .trim_end_matches('/')
                    .to_string(),
                model: lookup("OPENROUTER_MODEL")
                    .unwrap_or_else(|| "openai/gpt-3.5-turbo".to_string()),
                temperature: 0.7,
                max_tokens: 250,
                timeout: secs("OPENROUTER_TIMEOUT_SECS", 20),
            },
        })
    }
}

pub mod models;

use async_trait::async_trait;
use common::config::NewsApiConfig;
use common::{Article, HeadlineSource, NewsError, NewsResult};
use models::HeadlinesResponse;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Client for the NewsAPI `top-headlines` endpoint.
#[derive(Clone)]
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(config: &NewsApiConfig) -> NewsResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(NewsError::HttpRequest)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// One GET, no retry. The body is decoded whatever the status code.
    pub async fn get_top_headlines(
        &self,
        country: &str,
        page_size: u8,
    ) -> NewsResult<Vec<Article>> {
        let url = format!("{}/top-headlines", self.base_url);
        let page_size = page_size.to_string();
        debug!("GET {} country={} pageSize={}", url, country, page_size);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("country", country),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed: HeadlinesResponse = serde_json::from_str(&body)
            .map_err(|e| NewsError::Parse(format!("headlines body ({}): {}", status, e)))?;

        debug!(
            "News API status={} totalResults={}",
            parsed.status.as_deref().unwrap_or("missing"),
            parsed.total_results.unwrap_or_default()
        );

        if let Some(message) = &parsed.message {
            warn!(
                "News API answered {} ({}): {}",
                status,
                parsed.code.as_deref().unwrap_or("unknown"),
                message
            );
        }

        Ok(parsed.articles.into_iter().map(Article::from).collect())
    }
}

#[async_trait]
impl HeadlineSource for NewsApiClient {
    async fn fetch_headlines(&self, country: &str, count: u8) -> Vec<Article> {
        match self.get_top_headlines(country, count).await {
            Ok(articles) => {
                info!("Fetched {} headlines for {}", articles.len(), country);
                articles
            }
            Err(e) => {
                warn!("Fetching headlines for {} failed: {}", country, e);
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "News API"
    }
}

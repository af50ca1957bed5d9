use async_trait::async_trait;
use serde_json::Value;

use crate::article::Article;
use crate::error::NewsResult;

/// Where a pass gets its headlines from.
///
/// Implementations swallow their own failures: an unreachable upstream or a
/// malformed body is reported as an empty list, never as an error.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    async fn fetch_headlines(&self, country: &str, count: u8) -> Vec<Article>;
    fn name(&self) -> &'static str;
}

/// Sends one prompt to a language model and returns its raw JSON reply.
#[async_trait]
pub trait HeadlineClassifier: Send + Sync {
    async fn classify(&self, prompt: &str) -> NewsResult<Value>;
    fn name(&self) -> &'static str;
}

use common::Article;
use serde::Deserialize;

/// Body of `GET /top-headlines`. Error responses carry `status: "error"`,
/// a `code`, a `message` and no `articles`.
#[derive(Debug, Deserialize)]
pub struct HeadlinesResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "totalResults")]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
pub struct NewsApiArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<NewsApiSource>,
    #[serde(default, rename = "urlToImage")]
    pub url_to_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsApiSource {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<NewsApiArticle> for Article {
    fn from(item: NewsApiArticle) -> Self {
        Self {
            title: item.title.unwrap_or_default(),
            description: item.description,
            source_name: item.source.and_then(|s| s.name).unwrap_or_default(),
            image_url: item.url_to_image,
        }
    }
}

use std::time::Duration;

use common::config::{NewsApiConfig, OpenRouterConfig};
use mockito::Matcher;
use news_api::NewsApiClient;
use openrouter::OpenRouterClient;
use positive_news::{run_pass, Country, HeadlineCount, MarkdownPage, Options};

#[tokio::test]
async fn test_pass_against_mock_apis() {
    let mut news_server = mockito::Server::new_async().await;
    let mut router_server = mockito::Server::new_async().await;

    let news_mock = news_server
        .mock("GET", "/top-headlines")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("country".into(), "au".into()),
            Matcher::UrlEncoded("pageSize".into(), "3".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status": "ok", "articles": [
                {"source": {"name": "Good Times"}, "title": "Reef recovers", "description": "Coral is back.", "urlToImage": "https://img/reef.jpg"},
                {"source": {"name": "Gloom Daily"}, "title": "Storm hits coast", "description": null}
            ]}"#,
        )
        .create_async()
        .await;

    let positive = router_server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("Reef recovers".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": [{"message": {"content": "POSITIVE\nThe reef is thriving again."}}]}"#)
        .create_async()
        .await;

    let negative = router_server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("Storm hits coast".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": [{"message": {"content": "NEGATIVE"}}]}"#)
        .create_async()
        .await;

    let news = NewsApiClient::new(&NewsApiConfig {
        api_key: "news-key".to_string(),
        base_url: news_server.url(),
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    let classifier = OpenRouterClient::new(&OpenRouterConfig {
        api_key: "router-key".to_string(),
        base_url: router_server.url(),
        model: "openai/gpt-3.5-turbo".to_string(),
        temperature: 0.7,
        max_tokens: 250,
        timeout: Duration::from_secs(5),
    })
    .unwrap();

    let options = Options {
        country: Country::Australia,
        headline_count: HeadlineCount::new(3).unwrap(),
    };
    let mut page = MarkdownPage::new(Vec::new());

    let summary = run_pass(&news, &classifier, &mut page, &options).await.unwrap();
    let output = String::from_utf8(page.into_inner()).unwrap();

    assert_eq!(summary.fetched, 2);
    assert_eq!(summary.classified, 2);
    assert_eq!(summary.shown, 1);
    assert!(output.contains("## Reef recovers"));
    assert!(output.contains("![Reef recovers](https://img/reef.jpg)"));
    assert!(output.contains("The reef is thriving again."));
    assert!(output.contains("*Source: Good Times*"));
    assert!(!output.contains("Storm hits coast"));

    news_mock.assert_async().await;
    positive.assert_async().await;
    negative.assert_async().await;
}

use std::time::Duration;

use common::config::OpenRouterConfig;
use common::{HeadlineClassifier, NewsError};
use mockito::Matcher;
use openrouter::interpreter::interpret;
use openrouter::{build_prompt, OpenRouterClient, SYSTEM_PROMPT};
use serde_json::json;

fn client_for(base_url: &str) -> OpenRouterClient {
    OpenRouterClient::new(&OpenRouterConfig {
        api_key: "fake-router-key".to_string(),
        base_url: base_url.to_string(),
        model: "openai/gpt-3.5-turbo".to_string(),
        temperature: 0.7,
        max_tokens: 250,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_classify_sends_conversation() {
    let mut server = mockito::Server::new_async().await;
    let prompt = build_prompt("A", Some("B"), "C");

    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer fake-router-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "openai/gpt-3.5-turbo",
            "temperature": 0.7,
            "max_tokens": 250,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "model": "openai/gpt-3.5-turbo",
                "choices": [{
                    "message": {"role": "assistant", "content": "POSITIVE\nGreat things ahead."},
                    "finish_reason": "stop"
                }]
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server.url());
    let reply = client.classify(&prompt).await.unwrap();
    let result = interpret(&reply);

    assert!(result.is_positive());
    assert_eq!(result.rewrite.as_deref(), Some("Great things ahead."));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_body_is_returned_as_is() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "No auth credentials found", "code": 401}}"#)
        .create_async()
        .await;

    let reply = client_for(&server.url()).classify("prompt").await.unwrap();
    assert_eq!(reply["error"]["code"], 401);
    assert!(!interpret(&reply).is_positive());
}

#[tokio::test]
async fn test_non_json_body_becomes_error_object() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let reply = client_for(&server.url()).classify("prompt").await.unwrap();
    assert_eq!(
        reply,
        json!({"error": "bad response", "status_code": 502, "text": "Bad Gateway"})
    );
}

#[tokio::test]
async fn test_unreachable_host_is_an_error() {
    let result = client_for("http://127.0.0.1:9").classify("prompt").await;
    assert!(matches!(result, Err(NewsError::HttpRequest(_))));
}

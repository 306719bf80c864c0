use httpmock::Method::POST;
use httpmock::MockServer;
use teachme_ai::{AiError, ClaudeClient, ClaudeConfig, CompletionClient, OpenAiClient, OpenAiConfig};

fn openai(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new(OpenAiConfig::new("sk-test").with_base_url(server.base_url()))
}

fn claude(server: &MockServer) -> ClaudeClient {
    ClaudeClient::new(
        ClaudeConfig::new("sk-ant-test")
            .with_model("claude-test")
            .with_base_url(server.base_url()),
    )
}

#[tokio::test]
async fn openai_sends_bearer_auth_and_prompt() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/completions")
            .header("authorization", "Bearer sk-test")
            .body_contains("\"prompt\":\"Student: hi\\nTeach.me:\"")
            .body_contains("\"temperature\":0.0");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"choices\":[{\"text\":\" Hi there!\"}],\"usage\":{\"prompt_tokens\":7,\"completion_tokens\":3}}");
    });

    let completion = openai(&server)
        .complete("Student: hi\nTeach.me:", 0.0)
        .await
        .unwrap();
    mock.assert();
    assert_eq!(completion.text, " Hi there!");
    assert_eq!(completion.usage.total_tokens(), 10);
}

#[tokio::test]
async fn claude_sends_api_key_and_version() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/messages")
            .header("x-api-key", "sk-ant-test")
            .header("anthropic-version", "2023-06-01")
            .body_contains("\"model\":\"claude-test\"");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"content\":[{\"type\":\"text\",\"text\":\"What is a budget?\"}],\"usage\":{\"input_tokens\":12,\"output_tokens\":5}}");
    });

    let completion = claude(&server).complete("Student: hi\nTeach.me:", 0.0).await.unwrap();
    mock.assert();
    assert_eq!(completion.text, "What is a budget?");
    assert_eq!(completion.usage.input_tokens, 12);
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/completions");
        then.status(429).body("{\"error\":\"slow down\"}");
    });

    let err = openai(&server).complete("hello", 0.0).await.unwrap_err();
    mock.assert();
    assert!(matches!(err, AiError::RateLimited));
}

#[tokio::test]
async fn server_error_body_is_truncated() {
    let server = MockServer::start_async().await;
    let body = "x".repeat(300);
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(500).body(&body);
    });

    let err = claude(&server).complete("hello", 0.0).await.unwrap_err();
    mock.assert();
    match err {
        AiError::ApiError(msg) => {
            assert_eq!(msg, format!("HTTP 500 Internal Server Error: {}", "x".repeat(200)));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body("<html>not json</html>");
    });

    let err = openai(&server).complete("hello", 0.0).await.unwrap_err();
    mock.assert();
    assert!(matches!(err, AiError::ParseError(_)));
}

#[tokio::test]
async fn claude_reply_without_text_is_an_error() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"content\":[],\"usage\":{\"input_tokens\":12,\"output_tokens\":0}}");
    });

    let err = claude(&server).complete("hello", 0.0).await.unwrap_err();
    mock.assert();
    assert!(matches!(err, AiError::ParseError(_)));
}

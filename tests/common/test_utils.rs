use super::mocks::MockLlmClient;
use axum::{Router, body::Body, http::Response};
use ivrit_annotator::{
    config::LlmConfig,
    gateway::AnnotationGateway,
    server::{build_router, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;

pub const SCENARIO_TEXT: &str = "שלום עולם";

/// Completion content for the two-word scenario.
pub const SCENARIO_ANALYSIS: &str = r#"{"analysis":[{"word":"שלום","isCorrect":true,"correction":null},{"word":"עולם","isCorrect":false,"correction":"עולמ"}]}"#;

pub const SCENARIO_WORD_DETAIL: &str = "Транскрипция: shalom\nПеревод: hello\n";

pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "gpt-4".to_string(),
        temperature: 0.3,
    }
}

/// Router backed by `mock`; the returned handle exposes recorded requests.
pub fn create_test_app(mock: MockLlmClient) -> (Router, Arc<MockLlmClient>) {
    let mock = Arc::new(mock);
    let gateway = AnnotationGateway::new(mock.clone(), 0.3);
    let state = AppState {
        gateway: Arc::new(gateway),
        public_url: String::new(),
    };
    (build_router(state), mock)
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// Chat-completion wire body as the completion service returns it.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop",
            "logprobs": null
        }],
        "usage": { "prompt_tokens": 42, "completion_tokens": 17, "total_tokens": 59 }
    })
}

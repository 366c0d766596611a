//! End-to-end tests for the HTTP API.
//!
//! Each test drives the full Axum router in-process with mock clients.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use promptdesk::connector::http::{build, AppState};
use promptdesk::{
    Category, Completion, CompletionClient, Container, MockCompletion, MockImageGenerator, Role,
};

fn app_with(completion: Arc<dyn CompletionClient>, images: MockImageGenerator) -> Router {
    let container = Container::with_clients(completion, Arc::new(images));
    build(Arc::new(AppState::new(Arc::new(container))), None)
}

fn app() -> Router {
    app_with(Arc::new(MockCompletion::new()), MockImageGenerator::new())
}

async fn post(app: Router, path: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::post(path)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    post(app, path, body.to_string()).await
}

#[tokio::test]
async fn test_health_reports_version() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["model"], "mock-completion");
}

#[tokio::test]
async fn test_index_serves_web_ui() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/api/generate-image"));
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_chat_returns_response_key() {
    let mock = Arc::new(MockCompletion::new());
    let app = app_with(mock.clone(), MockImageGenerator::new());

    let (status, body) = post_json(app, "/api/chat", json!({ "message": "你好" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response": "[mock] 你好" }));

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 2);
    assert_eq!(calls[0][0].role(), Role::System);
    assert_eq!(calls[0][1].content(), "你好");
}

#[tokio::test]
async fn test_categories_return_result_key() {
    let cases = [
        ("/api/document-processing", json!({ "type": "qa", "content": "文档" })),
        ("/api/code-assistant", json!({ "type": "generate", "language": "go", "code": "排序" })),
        ("/api/text-processing", json!({ "type": "keywords", "content": "文本" })),
        ("/api/creative-writing", json!({ "type": "story", "topic": "海" })),
        ("/api/utility-tools", json!({ "type": "study", "input": "数学" })),
    ];

    for (path, payload) in cases {
        let (status, body) = post_json(app(), path, payload).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        let result = body["result"].as_str().unwrap();
        assert!(result.starts_with("[mock] "), "{path}: {result}");
    }
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let cases = [
        (Category::Chat, json!({})),
        (Category::Image, json!({ "prompt": "" })),
        (Category::Document, json!({ "type": "summary" })),
        (Category::Code, json!({ "type": "explain", "code": "x" })),
        (Category::Text, json!({ "content": "x" })),
        (Category::Creative, json!({ "type": "poem", "topic": "" })),
        (Category::Utility, json!({ "type": null, "input": "x" })),
    ];

    for (category, payload) in cases {
        let (status, body) = post_json(app(), category.route(), payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{category}");
        assert_eq!(body["error"], category.required_message(), "{category}");
    }
}

#[tokio::test]
async fn test_missing_fields_checked_before_type() {
    let (status, body) =
        post_json(app(), "/api/code-assistant", json!({ "type": "bogus", "code": "x" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Type, language, and code are required");
}

#[tokio::test]
async fn test_invalid_type_is_rejected() {
    let mock = Arc::new(MockCompletion::new());
    let app = app_with(mock.clone(), MockImageGenerator::new());

    let (status, body) = post_json(
        app,
        "/api/creative-writing",
        json!({ "type": "Poem", "topic": "秋天" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid creative writing type");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_empty_completion_uses_fallback() {
    let app = || app_with(Arc::new(MockCompletion::empty()), MockImageGenerator::new());

    let (_, body) = post_json(app(), "/api/chat", json!({ "message": "hi" })).await;
    assert_eq!(body["response"], "抱歉，我无法生成回复。");

    let (_, body) =
        post_json(app(), "/api/creative-writing", json!({ "type": "poem", "topic": "月" })).await;
    assert_eq!(body["result"], "创作失败，请稍后再试。");

    let (status, body) =
        post_json(app(), "/api/utility-tools", json!({ "type": "email", "input": "请假" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "处理失败，请稍后再试。");
}

#[tokio::test]
async fn test_empty_first_choice_uses_fallback() {
    let completion = Completion::new(vec![
        promptdesk::domain::Choice::new(""),
        promptdesk::domain::Choice::new("second"),
    ]);
    let app = app_with(
        Arc::new(MockCompletion::with_completion(completion)),
        MockImageGenerator::new(),
    );

    let (_, body) =
        post_json(app, "/api/text-processing", json!({ "type": "summary", "content": "x" })).await;
    assert_eq!(body["result"], "处理失败，请稍后再试。");
}

#[tokio::test]
async fn test_upstream_failure_is_generic_500() {
    let app = app_with(
        Arc::new(MockCompletion::failing("connection refused")),
        MockImageGenerator::new(),
    );

    let (status, body) =
        post_json(app, "/api/document-processing", json!({ "type": "summary", "content": "x" }))
            .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_unreadable_body_is_generic_500() {
    for raw in ["{not json", "null"] {
        let (status, body) = post(app(), "/api/chat", raw).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{raw}");
        assert_eq!(body, json!({ "error": "Internal server error" }), "{raw}");
    }
}

#[tokio::test]
async fn test_non_object_body_reports_missing_fields() {
    let (status, body) = post(app(), "/api/text-processing", "[\"summary\"]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Type and content are required");
}

#[tokio::test]
async fn test_falsy_message_is_missing() {
    let (status, body) = post_json(app(), "/api/chat", json!({ "message": 0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message is required");
}

#[tokio::test]
async fn test_numeric_type_is_invalid_type() {
    let (status, body) =
        post_json(app(), "/api/creative-writing", json!({ "type": 7, "topic": "x" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid creative writing type");
}

#[tokio::test]
async fn test_numeric_content_is_processed_as_text() {
    let mock = Arc::new(MockCompletion::new());
    let app = app_with(mock.clone(), MockImageGenerator::new());

    let (status, body) = post_json(
        app,
        "/api/document-processing",
        json!({ "type": "summary", "content": 123 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["result"].as_str().unwrap().ends_with("123"));
    assert_eq!(mock.calls()[0][1].content(), "请为以下文档生成摘要：\n\n123");
}

#[tokio::test]
async fn test_generate_image_returns_image_data() {
    let (status, body) =
        post_json(app(), "/api/generate-image", json!({ "prompt": "a lighthouse" })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["imageData"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_image_without_data_is_500() {
    let app = app_with(Arc::new(MockCompletion::new()), MockImageGenerator::empty());
    let (status, body) =
        post_json(app, "/api/generate-image", json!({ "prompt": "a lighthouse" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

//! The prompt endpoints: one `POST` route per text category plus image
//! generation. Each handler validates its fields, runs one use case and
//! wraps the answer under the category's response key.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Map, Value};

use crate::connector::http::error::ServerError;
use crate::connector::http::state::AppState;
use crate::domain::{
    Category, ChatRequest, CodeRequest, CreativeRequest, DocumentRequest, DomainError,
    ImageRequest, PromptTemplate, TextRequest, UtilityRequest,
};

/// Register every category route.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(Category::Chat.route(), post(chat))
        .route(Category::Document.route(), post(document))
        .route(Category::Code.route(), post(code))
        .route(Category::Text.route(), post(text))
        .route(Category::Creative.route(), post(creative))
        .route(Category::Utility.route(), post(utility))
        .route(Category::Image.route(), post(generate_image))
}

/// The fields of a JSON request body, read loosely.
///
/// Any JSON value is accepted for any field. Falsy values (`null`, `false`,
/// `0`, `""`) count as absent. Other values are rendered as text, so a
/// numeric `content` is processed and a numeric `type` matches no task.
#[derive(Debug, Default)]
struct RequestBody {
    fields: Map<String, Value>,
}

impl RequestBody {
    /// Unparsable JSON and a `null` body are server errors. Any other
    /// non-object body simply has no fields.
    fn parse(category: Category, bytes: &Bytes) -> Result<Self, ServerError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| {
            ServerError::from_domain(category, DomainError::malformed_body(e.to_string()))
        })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Null => Err(ServerError::from_domain(
                category,
                DomainError::malformed_body("body is null"),
            )),
            _ => Ok(Self::default()),
        }
    }

    /// A free-text field such as `content` or `topic`.
    fn text(&self, key: &str) -> Option<String> {
        self.fields.get(key).filter(|v| is_truthy(v)).map(render)
    }

    /// The `type` selector. Non-string values keep their JSON form so they
    /// can never name a task.
    fn kind(&self) -> Option<String> {
        match self.fields.get("type")? {
            Value::String(s) => Some(s.clone()),
            other if is_truthy(other) => Some(other.to_string()),
            _ => None,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

async fn chat(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Value>, ServerError> {
    let body = RequestBody::parse(Category::Chat, &body)?;
    let request = ChatRequest::from_fields(body.text("message").as_deref())
        .map_err(|e| ServerError::from_domain(Category::Chat, e))?;
    complete(&state, &request).await
}

async fn document(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ServerError> {
    let body = RequestBody::parse(Category::Document, &body)?;
    let request =
        DocumentRequest::from_fields(body.kind().as_deref(), body.text("content").as_deref())
            .map_err(|e| ServerError::from_domain(Category::Document, e))?;
    complete(&state, &request).await
}

async fn code(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Value>, ServerError> {
    let body = RequestBody::parse(Category::Code, &body)?;
    let request = CodeRequest::from_fields(
        body.kind().as_deref(),
        body.text("language").as_deref(),
        body.text("code").as_deref(),
    )
    .map_err(|e| ServerError::from_domain(Category::Code, e))?;
    complete(&state, &request).await
}

async fn text(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Value>, ServerError> {
    let body = RequestBody::parse(Category::Text, &body)?;
    let request = TextRequest::from_fields(body.kind().as_deref(), body.text("content").as_deref())
        .map_err(|e| ServerError::from_domain(Category::Text, e))?;
    complete(&state, &request).await
}

async fn creative(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ServerError> {
    let body = RequestBody::parse(Category::Creative, &body)?;
    let request =
        CreativeRequest::from_fields(body.kind().as_deref(), body.text("topic").as_deref())
            .map_err(|e| ServerError::from_domain(Category::Creative, e))?;
    complete(&state, &request).await
}

async fn utility(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ServerError> {
    let body = RequestBody::parse(Category::Utility, &body)?;
    let request =
        UtilityRequest::from_fields(body.kind().as_deref(), body.text("input").as_deref())
            .map_err(|e| ServerError::from_domain(Category::Utility, e))?;
    complete(&state, &request).await
}

async fn generate_image(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ServerError> {
    let body = RequestBody::parse(Category::Image, &body)?;
    let mut request = ImageRequest::from_fields(body.text("prompt").as_deref())
        .map_err(|e| ServerError::from_domain(Category::Image, e))?;
    if let Some(size) = body.text("size") {
        request = request.with_size(size);
    }

    let data = state
        .container
        .image_use_case()
        .execute(&request)
        .await
        .map_err(|e| ServerError::from_domain(Category::Image, e))?;

    Ok(wrap(Category::Image, data))
}

async fn complete(
    state: &AppState,
    request: &dyn PromptTemplate,
) -> Result<Json<Value>, ServerError> {
    let category = request.category();
    let text = state
        .container
        .prompt_use_case()
        .execute(request)
        .await
        .map_err(|e| ServerError::from_domain(category, e))?;
    Ok(wrap(category, text))
}

fn wrap(category: Category, value: String) -> Json<Value> {
    let mut body = Map::new();
    body.insert(category.response_key().to_string(), Value::String(value));
    Json(Value::Object(body))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    fn body(json: &'static str) -> RequestBody {
        RequestBody::parse(Category::Text, &Bytes::from_static(json.as_bytes())).unwrap()
    }

    #[test]
    fn unparsable_and_null_bodies_are_server_errors() {
        for raw in ["{not json", "null", ""] {
            let err = RequestBody::parse(Category::Chat, &Bytes::from_static(raw.as_bytes()))
                .unwrap_err();
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR, "{raw:?}");
        }
    }

    #[test]
    fn non_object_body_has_no_fields() {
        let body = body("[1, 2]");
        assert_eq!(body.kind(), None);
        assert_eq!(body.text("content"), None);
    }

    #[test]
    fn falsy_values_count_as_absent() {
        let body = body(r#"{"type": null, "content": 0, "topic": false, "input": ""}"#);
        assert_eq!(body.kind(), None);
        assert_eq!(body.text("content"), None);
        assert_eq!(body.text("topic"), None);
        assert_eq!(body.text("input"), None);
    }

    #[test]
    fn truthy_values_render_as_text() {
        let body = body(r#"{"content": 123, "topic": true, "input": ["a", 1], "code": {"x": 1}}"#);
        assert_eq!(body.text("content").as_deref(), Some("123"));
        assert_eq!(body.text("topic").as_deref(), Some("true"));
        assert_eq!(body.text("input").as_deref(), Some("a,1"));
        assert_eq!(body.text("code").as_deref(), Some("[object Object]"));
    }

    #[test]
    fn non_string_type_never_names_a_task() {
        assert_eq!(body(r#"{"type": 7}"#).kind().as_deref(), Some("7"));
        assert_eq!(body(r#"{"type": ["poem"]}"#).kind().as_deref(), Some(r#"["poem"]"#));
        assert!(CreativeRequest::from_fields(Some(r#"["poem"]"#), Some("sea")).is_err());
    }

    #[test]
    fn wrap_uses_category_key() {
        let Json(value) = wrap(Category::Chat, "hi".into());
        assert_eq!(value["response"], "hi");
        let Json(value) = wrap(Category::Code, "ok".into());
        assert_eq!(value["result"], "ok");
    }
}

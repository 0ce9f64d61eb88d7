use api::{middleware::log_request, routes::routes, state::AppState};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    middleware::from_fn,
};
use db::test_utils::setup_test_db;
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory database, plus the state behind it.
pub async fn make_test_app() -> (Router, AppState) {
    let state = AppState::new(setup_test_db().await);
    state.warm_up().await;

    let router = Router::new()
        .nest("/api", routes(state.clone()))
        .layer(from_fn(log_request));

    (router, state)
}

/// Sends one request and decodes the JSON envelope.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

//! # Grid Data Routes
//!
//! `/read`, `/create`, `/delete`, `/update`, and `/health`. Handlers are
//! stateless translators: resolve the session, call the query engine or the
//! session's store, wrap the outcome in a `success` envelope.
//!
//! Every data response (success or error) is preceded by the configured
//! simulated latency, awaited after the session's store guard has been
//! dropped so other sessions are never stalled by it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::observability::Logger;
use crate::query::{self, engine};
use crate::session::SessionRegistry;
use crate::store::Record;

use super::cookie;
use super::errors::{ApiError, ApiResult};
use super::response::{AckEnvelope, HealthEnvelope, ReadEnvelope, RecordsEnvelope};

// ==================
// Shared State
// ==================

/// State shared across grid handlers
pub struct AppState {
    pub registry: SessionRegistry,
    pub delay: Duration,
    pub session_ttl_secs: i64,
}

impl AppState {
    pub fn new(registry: SessionRegistry, delay_ms: u64, session_ttl_secs: i64) -> Self {
        Self {
            registry,
            delay: Duration::from_millis(delay_ms),
            session_ttl_secs,
        }
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
struct CreateBody {
    data: Vec<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct DeleteBody {
    ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct UpdateBody {
    data: Vec<Map<String, Value>>,
}

// ==================
// Routes
// ==================

/// Create the grid data routes
pub fn grid_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/read", get(read_handler))
        .route("/create", post(create_handler))
        .route("/delete", post(delete_handler))
        .route("/update", post(update_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

// ==================
// Helpers
// ==================

/// Resolve the session token from the request, minting one if absent
fn resolve_token(headers: &HeaderMap) -> String {
    match cookie::session_token(headers) {
        Some(token) => token,
        None => {
            let token = cookie::mint_token();
            Logger::info("session_issued", &[("session", &token)]);
            token
        }
    }
}

/// Await the simulated latency, then wrap the outcome in a response that
/// re-issues the session cookie (sliding expiry).
async fn finish<T: Serialize>(state: &AppState, token: &str, result: ApiResult<T>) -> Response {
    tokio::time::sleep(state.delay).await;

    let mut response = match result {
        Ok(body) => Json(body).into_response(),
        Err(err) => {
            Logger::error("request_failed", &[("message", &err.to_string())]);
            err.into_response()
        }
    };

    let set_cookie = cookie::issue(token, state.session_ttl_secs);
    if let Ok(value) = HeaderValue::from_str(&set_cookie) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

// ==================
// Handlers
// ==================

async fn health_handler() -> impl IntoResponse {
    Json(HealthEnvelope::ok())
}

async fn read_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let token = resolve_token(&headers);
    let result = read_inner(&state, &token, &params).await;
    finish(&state, &token, result).await
}

async fn read_inner(
    state: &AppState,
    token: &str,
    params: &HashMap<String, String>,
) -> ApiResult<ReadEnvelope> {
    let sorts = match params.get("sort") {
        Some(raw) => query::parse_sorts(raw)?,
        None => Vec::new(),
    };
    let filters = match params.get("filter") {
        Some(raw) => query::parse_filters(raw)?,
        None => Vec::new(),
    };
    // Lenient integer parsing, like the clients this serves. An absent
    // `count` deliberately returns the remainder of the filtered set, not
    // an empty page; shipped clients always send both parameters.
    let start = params
        .get("startIndex")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let count = params.get("count").and_then(|s| s.parse().ok());

    let store = state.registry.get_or_create(token);
    let mut guard = store.lock().await;
    let output = engine::run(&mut guard, &sorts, &filters, start, count);
    drop(guard);

    Logger::info(
        "read",
        &[
            ("session", token),
            ("total", &output.total.to_string()),
            ("returned", &output.page.len().to_string()),
        ],
    );
    Ok(ReadEnvelope::new(output.total, output.page))
}

async fn create_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let token = resolve_token(&headers);
    let result = create_inner(&state, &token, &body).await;
    finish(&state, &token, result).await
}

async fn create_inner(state: &AppState, token: &str, body: &str) -> ApiResult<RecordsEnvelope> {
    let body: CreateBody = parse_body(body)?;

    let store = state.registry.get_or_create(token);
    let mut guard = store.lock().await;
    let created: Vec<Record> = body
        .data
        .into_iter()
        .map(|partial| guard.insert(None, partial))
        .collect();
    guard.sort_default();
    drop(guard);

    Logger::info(
        "create",
        &[("session", token), ("created", &created.len().to_string())],
    );
    Ok(RecordsEnvelope::new(created))
}

async fn delete_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let token = resolve_token(&headers);
    let result = delete_inner(&state, &token, &body).await;
    finish(&state, &token, result).await
}

async fn delete_inner(state: &AppState, token: &str, body: &str) -> ApiResult<AckEnvelope> {
    let body: DeleteBody = parse_body(body)?;

    let store = state.registry.get_or_create(token);
    let mut guard = store.lock().await;
    // Unknown ids are a silent no-op
    guard.remove(&body.ids);
    drop(guard);

    Logger::info(
        "delete",
        &[("session", token), ("ids", &body.ids.len().to_string())],
    );
    Ok(AckEnvelope::ok())
}

async fn update_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let token = resolve_token(&headers);
    let result = update_inner(&state, &token, &body).await;
    finish(&state, &token, result).await
}

async fn update_inner(state: &AppState, token: &str, body: &str) -> ApiResult<RecordsEnvelope> {
    let body: UpdateBody = parse_body(body)?;

    let ids: Vec<i64> = body
        .data
        .iter()
        .map(|partial| {
            partial
                .get("id")
                .and_then(Value::as_i64)
                .ok_or(crate::store::StoreError::MissingId)
        })
        .collect::<Result<_, _>>()?;

    let store = state.registry.get_or_create(token);
    let mut guard = store.lock().await;

    // Validate every id up front: an unknown id fails the whole request
    // with the collection unchanged.
    for id in &ids {
        if !guard.contains(*id) {
            return Err(crate::store::StoreError::NotFound(*id).into());
        }
    }

    let mut updated = Vec::with_capacity(ids.len());
    for (id, partial) in ids.iter().zip(body.data.iter()) {
        updated.push(guard.update(*id, partial)?);
    }
    drop(guard);

    Logger::info(
        "update",
        &[("session", token), ("updated", &updated.len().to_string())],
    );
    Ok(RecordsEnvelope::new(updated))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(SessionRegistry::new(Vec::new()), 0, 7200))
    }

    #[test]
    fn test_router_builds() {
        let _router = grid_routes(state());
    }

    #[tokio::test]
    async fn test_cookie_round_trip_through_router() {
        use axum::body::Body;
        use axum::http::{Request, StatusCode};
        use tower::ServiceExt;

        let state = state();
        let app = grid_routes(Arc::clone(&state));

        // A cookie-less request gets a session cookie issued.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/create")
                    .body(Body::from(r#"{"data": [{"name": "Ada"}]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(set_cookie.starts_with("gridstore.sid="));
        assert!(set_cookie.contains("HttpOnly"));

        let token = set_cookie
            .strip_prefix("gridstore.sid=")
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        // Presenting that token observes the same store; no new session
        // is minted.
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/read")
                    .header(header::COOKIE, format!("gridstore.sid={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::SET_COOKIE));

        assert_eq!(state.registry.len(), 1);
        let store = state.registry.get_or_create(&token);
        assert_eq!(store.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_then_read_round_trip() {
        let state = state();
        let token = cookie::mint_token();

        let created = create_inner(
            &state,
            &token,
            r#"{"data": [{"name": "Ada", "sortIndex": 10}]}"#,
        )
        .await
        .unwrap();
        assert_eq!(created.data.len(), 1);
        assert_eq!(created.data[0].id(), Some(1));

        let read = read_inner(&state, &token, &HashMap::new()).await.unwrap();
        assert_eq!(read.total, 1);
    }

    #[tokio::test]
    async fn test_read_malformed_sort_is_query_error() {
        let state = state();
        let mut params = HashMap::new();
        params.insert("sort".to_string(), "{".to_string());

        let err = read_inner(&state, "t", &params).await.unwrap_err();
        assert!(matches!(err, ApiError::Query(_)));
    }

    #[tokio::test]
    async fn test_read_unknown_operator_is_query_error() {
        let state = state();
        let mut params = HashMap::new();
        params.insert(
            "filter".to_string(),
            r#"[{"field":"a","operator":"!=","value":1}]"#.to_string(),
        );

        let err = read_inner(&state, "t", &params).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported filter operator: \"!=\""
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_id_acknowledges() {
        let state = state();
        let ack = delete_inner(&state, "t", r#"{"ids": [404]}"#).await.unwrap();
        assert!(ack.success);
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails_without_mutation() {
        let state = state();
        let token = cookie::mint_token();
        create_inner(&state, &token, r#"{"data": [{"name": "Ada"}]}"#)
            .await
            .unwrap();

        let err = update_inner(
            &state,
            &token,
            r#"{"data": [{"id": 1, "name": "Eda"}, {"id": 99, "name": "X"}]}"#,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Store(_)));

        // First record untouched: validation runs before any merge.
        let read = read_inner(&state, &token, &HashMap::new()).await.unwrap();
        assert_eq!(read.data[0].get("name"), Some(&serde_json::json!("Ada")));
    }

    #[tokio::test]
    async fn test_update_returns_records_in_request_order() {
        let state = state();
        let token = cookie::mint_token();
        create_inner(&state, &token, r#"{"data": [{"n": 1}, {"n": 2}]}"#)
            .await
            .unwrap();

        let updated = update_inner(
            &state,
            &token,
            r#"{"data": [{"id": 2, "n": 20}, {"id": 1, "n": 10}]}"#,
        )
        .await
        .unwrap();
        let ids: Vec<i64> = updated.data.iter().filter_map(Record::id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_body_parse_failure_is_invalid_body() {
        let state = state();
        let err = create_inner(&state, "t", "not json").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidBody(_)));
    }
}

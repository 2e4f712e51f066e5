//! JSON REST API for the section generator.
//!
//! Exposes an axum [`Router`] backed by any
//! [`sitegen_core::store::SectionStore`]. TLS, CORS, and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = sitegen_api::api_router(Arc::new(store));
//! ```

pub mod error;
pub mod sections;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use sitegen_core::{generator::SectionGenerator, store::SectionStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SectionStore + 'static,
{
  Router::new()
    .route("/sections", get(sections::list::<S>).post(sections::create::<S>))
    .route("/health", get(health))
    .with_state(SectionGenerator::new(store))
}

/// `GET /health`
async fn health() -> Json<Value> { Json(json!({ "status": "ok" })) }

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::io;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use chrono::Utc;
  use sitegen_core::{
    section::{NewSection, Section},
    store::SectionQuery,
  };
  use sitegen_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  use super::*;

  async fn make_store() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::open_in_memory().await.unwrap())
  }

  async fn oneshot_raw<S>(
    store:  Arc<S>,
    method: &str,
    uri:    &str,
    body:   &str,
  ) -> Response
  where
    S: SectionStore + 'static,
  {
    let req = Request::builder()
      .method(method)
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    api_router(store).oneshot(req).await.unwrap()
  }

  async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  async fn body_sections(resp: Response) -> Vec<Section> {
    serde_json::from_value(body_json(resp).await).unwrap()
  }

  /// A store whose backend is never reachable.
  struct UnreachableStore;

  impl SectionStore for UnreachableStore {
    type Error = io::Error;

    async fn insert_batch(&self, _: Vec<NewSection>) -> io::Result<Vec<Section>> {
      Err(io::Error::new(io::ErrorKind::ConnectionRefused, "db at 10.0.0.7 is down"))
    }

    async fn list(&self, _: &SectionQuery) -> io::Result<Vec<Section>> {
      Err(io::Error::new(io::ErrorKind::ConnectionRefused, "db at 10.0.0.7 is down"))
    }

    async fn count(&self) -> io::Result<u64> {
      Err(io::Error::new(io::ErrorKind::ConnectionRefused, "db at 10.0.0.7 is down"))
    }
  }

  // ── POST /sections ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn post_returns_201_with_three_sections() {
    let store  = make_store().await;
    let before = Utc::now();
    let resp   = oneshot_raw(store, "POST", "/sections", r#"{"idea":"My Cafe"}"#).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let sections = body_sections(resp).await;
    let kinds: Vec<_> = sections.iter().map(|s| s.kind.as_str()).collect();
    assert_eq!(kinds, ["Hero", "About", "Contact"]);
    assert_eq!(sections[0].content, "Welcome to My Cafe!");
    assert_eq!(sections[2].content, "Contact us at contact@mycafe.com");
    assert!(sections.iter().all(|s| s.created_at >= before));
  }

  #[tokio::test]
  async fn post_response_uses_wire_field_names() {
    let store = make_store().await;
    let resp  = oneshot_raw(store, "POST", "/sections", r#"{"idea":"Kiln"}"#).await;
    let json  = body_json(resp).await;
    let first = &json[0];
    assert!(first["id"].is_string(), "json: {json}");
    assert_eq!(first["type"], "Hero");
    assert!(first["createdAt"].is_string(), "json: {json}");
  }

  #[tokio::test]
  async fn post_with_empty_idea_is_accepted() {
    let store = make_store().await;
    let resp  = oneshot_raw(store, "POST", "/sections", r#"{"idea":""}"#).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let sections = body_sections(resp).await;
    assert_eq!(sections[0].content, "Welcome to !");
  }

  #[tokio::test]
  async fn post_without_idea_returns_400() {
    let store = make_store().await;
    let resp  = oneshot_raw(store.clone(), "POST", "/sections", "{}").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    let msg  = json["error"].as_str().unwrap();
    assert!(msg.contains("idea"), "error: {msg}");

    assert_eq!(store.count().await.unwrap(), 0);
  }

  #[tokio::test]
  async fn post_with_non_string_idea_returns_400() {
    let store = make_store().await;
    let resp  = oneshot_raw(store, "POST", "/sections", r#"{"idea":42}"#).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn post_with_malformed_json_returns_400() {
    let store = make_store().await;
    let resp  = oneshot_raw(store, "POST", "/sections", "{\"idea\":").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // ── GET /sections ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_on_empty_store_returns_empty_array() {
    let store = make_store().await;
    let resp  = oneshot_raw(store, "GET", "/sections", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
  }

  #[tokio::test]
  async fn get_lists_every_submission_in_order() {
    let store = make_store().await;
    oneshot_raw(store.clone(), "POST", "/sections", r#"{"idea":"Alpha"}"#).await;
    oneshot_raw(store.clone(), "POST", "/sections", r#"{"idea":"Alpha"}"#).await;
    oneshot_raw(store.clone(), "POST", "/sections", r#"{"idea":"Beta"}"#).await;

    let resp = oneshot_raw(store, "GET", "/sections", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let sections = body_sections(resp).await;
    assert_eq!(sections.len(), 9);
    assert_eq!(sections[0].content, "Welcome to Alpha!");
    assert_eq!(sections[8].content, "Contact us at contact@beta.com");
    assert!(sections.windows(2).all(|w| w[0].created_at <= w[1].created_at));
  }

  #[tokio::test]
  async fn get_with_limit_returns_oldest_first() {
    let store = make_store().await;
    oneshot_raw(store.clone(), "POST", "/sections", r#"{"idea":"Alpha"}"#).await;
    oneshot_raw(store.clone(), "POST", "/sections", r#"{"idea":"Beta"}"#).await;

    let resp = oneshot_raw(store.clone(), "GET", "/sections?limit=2", "").await;
    let page = body_sections(resp).await;
    let kinds: Vec<_> = page.iter().map(|s| s.kind.as_str()).collect();
    assert_eq!(kinds, ["Hero", "About"]);
    assert_eq!(page[0].content, "Welcome to Alpha!");

    let resp = oneshot_raw(store, "GET", "/sections?offset=3&limit=1", "").await;
    let page = body_sections(resp).await;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].content, "Welcome to Beta!");
  }

  #[tokio::test]
  async fn get_with_bad_limit_returns_400() {
    let store = make_store().await;
    let resp  = oneshot_raw(store, "GET", "/sections?limit=-1", "").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // ── Store failures ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn store_failure_is_generic_500() {
    let store = Arc::new(UnreachableStore);

    for (method, body) in [("POST", r#"{"idea":"x"}"#), ("GET", "")] {
      let resp = oneshot_raw(store.clone(), method, "/sections", body).await;
      assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
      let json = body_json(resp).await;
      assert_eq!(json, json!({ "error": error::INTERNAL_ERROR_MESSAGE }));
    }
  }

  // ── Health ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn health_returns_ok() {
    let resp = oneshot_raw(make_store().await, "GET", "/health", "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "status": "ok" }));
  }
}

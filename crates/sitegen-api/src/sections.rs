//! Handlers for `/sections` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/sections` | Optional `limit`, `offset`; full history by default |
//! | `POST` | `/sections` | Body: `{"idea":"..."}`; returns 201 + three sections |

use axum::{
  Json,
  extract::{
    Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use sitegen_core::{
  generator::SectionGenerator,
  section::Section,
  store::{SectionQuery, SectionStore},
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub limit:  Option<usize>,
  pub offset: Option<usize>,
}

impl From<ListParams> for SectionQuery {
  fn from(p: ListParams) -> Self {
    SectionQuery { limit: p.limit, offset: p.offset }
  }
}

/// `GET /sections[?limit=...][&offset=...]`
pub async fn list<S>(
  State(generator): State<SectionGenerator<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Section>>, ApiError>
where
  S: SectionStore + 'static,
{
  let Query(params) = params?;
  let query = SectionQuery::from(params);

  let sections = generator
    .store()
    .list(&query)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(sections))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /sections`.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  /// Free text; may be empty. A missing or non-string value is rejected.
  pub idea: String,
}

/// `POST /sections`: returns 201 + the three stored [`Section`]s.
pub async fn create<S>(
  State(generator): State<SectionGenerator<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SectionStore + 'static,
{
  let Json(body) = body?;

  let sections = generator
    .generate(&body.idea)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(sections)))
}

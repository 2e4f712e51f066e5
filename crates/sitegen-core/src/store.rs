//! The `SectionStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `sitegen-store-sqlite`). Higher layers (`sitegen-api`, the generator)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::section::{NewSection, Section};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`SectionStore::list`].
///
/// The default query returns the full history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionQuery {
  pub limit:  Option<usize>,
  pub offset: Option<usize>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a section store backend.
///
/// Writes are append-only: there is no update or delete. Reads always come
/// back ordered by creation time, oldest first, with ties in insertion
/// order.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SectionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist every record as one unit and return them with assigned ids
  /// and creation timestamps, in input order.
  ///
  /// Either all records are stored or none are.
  fn insert_batch(
    &self,
    records: Vec<NewSection>,
  ) -> impl Future<Output = Result<Vec<Section>, Self::Error>> + Send + '_;

  /// Return stored sections in creation order, windowed by `query`.
  fn list<'a>(
    &'a self,
    query: &'a SectionQuery,
  ) -> impl Future<Output = Result<Vec<Section>, Self::Error>> + Send + 'a;

  /// Total number of stored sections.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Every section ever inserted, oldest first.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Section>, Self::Error>> + Send + '_ {
    async move {
      let query = SectionQuery::default();
      self.list(&query).await
    }
  }
}

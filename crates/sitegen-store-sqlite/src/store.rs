//! [`SqliteStore`], the SQLite implementation of [`SectionStore`].

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use sitegen_core::{
  section::{NewSection, Section},
  store::{SectionQuery, SectionStore},
};

use crate::{
  encode::RawSection,
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A section store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::info!(path = %path.display(), "opened section store");
    Ok(store)
  }

  /// Open an in-memory store, mostly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection, flushing any pending work.
  ///
  /// Other clones of this store fail with a database error afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    tracing::info!("closed section store");
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SectionStore impl ───────────────────────────────────────────────────────

impl SectionStore for SqliteStore {
  type Error = Error;

  async fn insert_batch(&self, records: Vec<NewSection>) -> Result<Vec<Section>> {
    let created_at = Utc::now();
    let sections: Vec<Section> = records
      .into_iter()
      .map(|r| Section {
        id:      Uuid::new_v4(),
        kind:    r.kind.label().to_owned(),
        content: r.content,
        created_at,
      })
      .collect();

    if sections.is_empty() {
      return Ok(sections);
    }

    let rows: Vec<RawSection> = sections.iter().map(RawSection::from_section).collect();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO sections (id, type, content, created_at)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for row in &rows {
            stmt.execute(rusqlite::params![
              row.id,
              row.kind,
              row.content,
              row.created_at,
            ])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(sections)
  }

  async fn list(&self, query: &SectionQuery) -> Result<Vec<Section>> {
    // SQLite treats a negative LIMIT as "no limit".
    let limit_val  = query.limit.map_or(-1, |l| i64::try_from(l).unwrap_or(i64::MAX));
    let offset_val = query.offset.map_or(0, |o| i64::try_from(o).unwrap_or(i64::MAX));

    let raws: Vec<RawSection> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, type, content, created_at
           FROM sections
           ORDER BY created_at ASC, rowid ASC
           LIMIT ?1 OFFSET ?2",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val, offset_val], RawSection::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSection::into_section).collect()
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM sections", [], |row| row.get(0))?)
      })
      .await?;

    u64::try_from(n).map_err(|_| Error::InvalidCount(n))
  }
}

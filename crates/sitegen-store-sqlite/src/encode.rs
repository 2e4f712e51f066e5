//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed nanosecond
//! fraction, so lexical order in SQL equals chronological order. UUIDs are
//! stored as hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use sitegen_core::section::Section;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Raw row ──────────────────────────────────────────────────────────────────

/// A `sections` row as read from or written to SQLite.
pub struct RawSection {
  pub id:         String,
  pub kind:       String,
  pub content:    String,
  pub created_at: String,
}

impl RawSection {
  pub fn from_section(section: &Section) -> Self {
    Self {
      id:         encode_uuid(section.id),
      kind:       section.kind.clone(),
      content:    section.content.clone(),
      created_at: encode_dt(section.created_at),
    }
  }

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      kind:       row.get(1)?,
      content:    row.get(2)?,
      created_at: row.get(3)?,
    })
  }

  pub fn into_section(self) -> Result<Section> {
    Ok(Section {
      id:         decode_uuid(&self.id)?,
      kind:       self.kind,
      content:    self.content,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

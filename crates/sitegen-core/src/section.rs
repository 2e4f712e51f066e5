//! Section types, the only entity the generator produces.
//!
//! A section is an immutable block of website copy. Once stored it is never
//! updated or deleted; the store only appends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

// ─── Kind ────────────────────────────────────────────────────────────────────

/// The closed set of section types the generator emits.
///
/// Storage keeps the label as free text; this enum exists so nothing but
/// these three spellings is ever written by the generator.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumIter,
  EnumString,
)]
pub enum SectionKind {
  Hero,
  About,
  Contact,
}

impl SectionKind {
  /// The label written to the `type` column.
  pub fn label(self) -> &'static str {
    match self {
      Self::Hero => "Hero",
      Self::About => "About",
      Self::Contact => "Contact",
    }
  }
}

// ─── Section ─────────────────────────────────────────────────────────────────

/// A persisted section. Serialises as
/// `{"id", "type", "content", "createdAt"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
  /// Store-assigned; unique and immutable.
  pub id:         Uuid,
  /// Free-text label. Sections written by this crate always hold a
  /// [`SectionKind`] label, but the store accepts any string.
  #[serde(rename = "type")]
  pub kind:       String,
  pub content:    String,
  /// Server-assigned insertion time; the sole sort key.
  pub created_at: DateTime<Utc>,
}

// ─── NewSection ──────────────────────────────────────────────────────────────

/// Input to [`crate::store::SectionStore::insert_batch`].
/// `id` and `created_at` are always set by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSection {
  pub kind:    SectionKind,
  pub content: String,
}

impl NewSection {
  pub fn new(kind: SectionKind, content: impl Into<String>) -> Self {
    Self { kind, content: content.into() }
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn label_matches_display_and_parse() {
    for kind in SectionKind::iter() {
      assert_eq!(kind.label(), kind.to_string());
      assert_eq!(kind.label(), kind.as_ref());
      assert_eq!(kind.label().parse::<SectionKind>().unwrap(), kind);
    }
  }

  #[test]
  fn section_serialises_with_wire_field_names() {
    let section = Section {
      id:         Uuid::nil(),
      kind:       "Hero".into(),
      content:    "Welcome to Tea!".into(),
      created_at: DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc),
    };

    let json = serde_json::to_value(&section).unwrap();
    assert_eq!(json["type"], "Hero");
    assert_eq!(json["content"], "Welcome to Tea!");
    assert!(json.get("createdAt").is_some(), "json: {json}");
    assert!(json.get("kind").is_none());
  }
}

//! JSON export of a section list.
//!
//! Pure formatting: the caller decides where the bytes go.

use crate::{Result, section::Section};

/// File name used when the caller does not pick one.
pub const DEFAULT_EXPORT_FILE: &str = "website-sections.json";

/// Render `sections` as pretty-printed JSON with two-space indentation.
pub fn to_json_pretty(sections: &[Section]) -> Result<String> {
  Ok(serde_json::to_string_pretty(sections)?)
}

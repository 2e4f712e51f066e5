//! Derivation of template sections from a website idea.
//!
//! [`derive_sections`] is pure; [`SectionGenerator`] pairs it with an
//! injected store handle and writes each triple as one batch.

use std::sync::Arc;

use crate::{
  section::{NewSection, Section, SectionKind},
  store::SectionStore,
};

/// Lowercase `idea` and drop every whitespace character.
///
/// No other sanitisation happens: punctuation and non-ASCII characters pass
/// straight through into the contact address.
pub fn slug(idea: &str) -> String {
  idea
    .chars()
    .filter(|&c| !is_slug_whitespace(c))
    .collect::<String>()
    .to_lowercase()
}

/// The ECMAScript `\s` class: Unicode `White_Space` minus NEL (U+0085),
/// plus the byte-order mark (U+FEFF).
fn is_slug_whitespace(c: char) -> bool {
  (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// The three section payloads for `idea`, in Hero, About, Contact order.
///
/// Any string is accepted, including the empty string.
pub fn derive_sections(idea: &str) -> [NewSection; 3] {
  [
    NewSection::new(SectionKind::Hero, format!("Welcome to {idea}!")),
    NewSection::new(
      SectionKind::About,
      format!("This is an About section for {idea}."),
    ),
    NewSection::new(
      SectionKind::Contact,
      format!("Contact us at contact@{}.com", slug(idea)),
    ),
  ]
}

// ─── Generator ───────────────────────────────────────────────────────────────

/// Generates sections for an idea and persists them through `S`.
///
/// Cloning is cheap; the store handle is reference-counted.
pub struct SectionGenerator<S> {
  store: Arc<S>,
}

impl<S> Clone for SectionGenerator<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: SectionStore> SectionGenerator<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub fn store(&self) -> &Arc<S> { &self.store }

  /// Derive the three sections for `idea` and insert them as one batch.
  ///
  /// Repeated calls with the same idea store independent copies.
  pub async fn generate(&self, idea: &str) -> Result<Vec<Section>, S::Error> {
    let sections = self
      .store
      .insert_batch(derive_sections(idea).into())
      .await?;
    tracing::debug!(count = sections.len(), "stored generated sections");
    Ok(sections)
  }
}

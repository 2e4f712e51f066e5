//! Plain-text rendering of section lists for the terminal.

use sitegen_core::section::Section;

/// Shown for every failure; details go to the debug log only.
pub const FAILURE_MESSAGE: &str = "Something went wrong! Please try again.";

/// One numbered line per section followed by a count footer.
pub fn render_sections(sections: &[Section]) -> String {
  if sections.is_empty() {
    return "No sections yet. Generate some with `sitegen generate <IDEA>`.\n"
      .to_string();
  }

  let mut out: String = sections
    .iter()
    .enumerate()
    .map(|(i, s)| format!("{:>3}. [{}] {}\n", i + 1, s.kind, s.content))
    .collect();
  out.push_str(&format!("\nSections generated: {}\n", sections.len()));
  out
}

/* src/core/src/document.rs */

use serde::Deserialize;

/// A content-backend record. Read-only from this system's perspective;
/// `data` stays an opaque bag and is coerced downstream (see `normalize`).
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
  pub id: String,
  #[serde(default)]
  pub uid: Option<String>,
  #[serde(rename = "type")]
  pub doc_type: String,
  pub lang: String,
  #[serde(default)]
  pub first_publication_date: Option<String>,
  #[serde(default)]
  pub last_publication_date: Option<String>,
  #[serde(default)]
  pub data: serde_json::Value,
  #[serde(default)]
  pub alternate_languages: Vec<AlternateLanguage>,
}

/// Cross-reference to a translated sibling in another locale.
#[derive(Debug, Clone, Deserialize)]
pub struct AlternateLanguage {
  pub id: String,
  #[serde(default)]
  pub uid: Option<String>,
  #[serde(rename = "type")]
  pub doc_type: String,
  pub lang: String,
}

impl Document {
  /// Last-modified-or-first-published timestamp, as the backend emits it.
  pub fn modified_at(&self) -> Option<&str> {
    self.last_publication_date.as_deref().or(self.first_publication_date.as_deref())
  }
}

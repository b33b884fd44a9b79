/* src/content/src/views.rs */

//! Defensively-coerced views of the settings and navigation singletons.
//! Their `Default` impls carry the hardcoded fallbacks used when the
//! backend is unavailable.

use navapools_core::{Document, coerce_text, coerce_url};

#[derive(Debug, Clone)]
pub struct Settings {
  pub site_name: String,
  pub footer_text: String,
}

impl Default for Settings {
  fn default() -> Self {
    Self { site_name: "Nava Pools".to_string(), footer_text: String::new() }
  }
}

impl Settings {
  pub fn from_document(doc: &Document) -> Self {
    let defaults = Self::default();
    let site_name = doc
      .data
      .get("site_name")
      .map(coerce_text)
      .filter(|v| !v.is_empty())
      .unwrap_or(defaults.site_name);
    let footer_text = doc.data.get("footer_text").map(coerce_text).unwrap_or_default();
    Self { site_name, footer_text }
  }
}

#[derive(Debug, Clone)]
pub struct NavItem {
  pub label: String,
  pub url: String,
}

#[derive(Debug, Clone, Default)]
pub struct Navigation {
  pub items: Vec<NavItem>,
}

impl Navigation {
  pub fn from_document(doc: &Document) -> Self {
    let Some(items) = doc.data.get("items").and_then(|v| v.as_array()) else {
      return Self::default();
    };
    let items = items
      .iter()
      .filter_map(|item| {
        let label = item.get("label").map(coerce_text).unwrap_or_default();
        let url = item.get("link").map(coerce_url).unwrap_or_default();
        if label.is_empty() && url.is_empty() {
          return None;
        }
        Some(NavItem { label, url })
      })
      .collect();
    Self { items }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn doc(data: serde_json::Value) -> Document {
    serde_json::from_value(json!({
      "id": "X", "type": "settings", "lang": "en-us", "data": data
    }))
    .expect("document")
  }

  #[test]
  fn settings_coerce_plain_and_rich() {
    let s = Settings::from_document(&doc(json!({
      "site_name": [{ "text": "Nava Pools Orlando" }],
      "footer_text": "Family owned since 2010"
    })));
    assert_eq!(s.site_name, "Nava Pools Orlando");
    assert_eq!(s.footer_text, "Family owned since 2010");
  }

  #[test]
  fn settings_empty_name_keeps_default() {
    let s = Settings::from_document(&doc(json!({ "site_name": "" })));
    assert_eq!(s.site_name, "Nava Pools");
  }

  #[test]
  fn navigation_coerces_link_objects() {
    let nav = Navigation::from_document(&doc(json!({
      "items": [
        { "label": "Services", "link": { "link_type": "Web", "url": "/en/services" } },
        { "label": "Contact", "link": "/en/contact" },
        { "label": "", "link": {} }
      ]
    })));
    assert_eq!(nav.items.len(), 2);
    assert_eq!(nav.items[0].url, "/en/services");
    assert_eq!(nav.items[1].url, "/en/contact");
  }

  #[test]
  fn navigation_missing_items_is_empty() {
    assert!(Navigation::from_document(&doc(json!({}))).items.is_empty());
  }
}

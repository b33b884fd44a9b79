/* src/core/src/normalize.rs */

//! Turns an unreliable, loosely-typed document into a strongly-typed page
//! view, and hosts the SEO image search used by the metadata builder.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::coerce::{ImageRef, coerce_text, image_ref};
use crate::document::{AlternateLanguage, Document};

/// One ordered, typed content block within a page body. `primary` and
/// `items` stay opaque bags; each renderer coerces what it needs.
#[derive(Debug, Clone, Deserialize)]
pub struct Slice {
  pub slice_type: String,
  #[serde(default)]
  pub primary: Map<String, Value>,
  #[serde(default)]
  pub items: Vec<Map<String, Value>>,
}

/// Strongly-typed view of a page document.
#[derive(Debug, Clone, Default)]
pub struct PageView {
  pub title: String,
  pub description: String,
  pub slices: Vec<Slice>,
  pub noindex: bool,
}

/// Build a page view, but only when the document's discriminant matches the
/// expected kind. A mismatched kind yields `None` rather than type-unsafe
/// field access.
pub fn page_view(doc: &Document, expected_kind: &str) -> Option<PageView> {
  if doc.doc_type != expected_kind {
    return None;
  }
  let data = doc.data.as_object();
  let title = data.and_then(|d| d.get("title")).map(coerce_text).unwrap_or_default();
  let description = data.and_then(|d| d.get("description")).map(coerce_text).unwrap_or_default();
  let slices = data
    .and_then(|d| d.get("slices"))
    .cloned()
    .map(slices_from_value)
    .unwrap_or_default();
  Some(PageView { title, description, slices, noindex: noindex(doc) })
}

/// Parse a slice sequence, dropping entries that do not deserialize. A
/// malformed entry never aborts the rest of the sequence.
pub fn slices_from_value(value: Value) -> Vec<Slice> {
  let Value::Array(entries) = value else {
    return Vec::new();
  };
  entries.into_iter().filter_map(|e| serde_json::from_value(e).ok()).collect()
}

/// The noindex flag lives in one of three places depending on the custom
/// type's vintage: top-level, under `seo`, or under `meta`.
pub fn noindex(doc: &Document) -> bool {
  let flag = |v: Option<&Value>| v.and_then(Value::as_bool).unwrap_or(false);
  flag(doc.data.get("noindex"))
    || flag(doc.data.get("seo").and_then(|s| s.get("noindex")))
    || flag(doc.data.get("meta").and_then(|m| m.get("noindex")))
}

/// The pure half of the locale-fallback protocol: given the default-locale
/// document, find the alternate pointing at the requested language with a
/// matching kind.
pub fn pick_alternate<'a>(
  doc: &'a Document,
  want_lang: &str,
  want_kind: &str,
) -> Option<&'a AlternateLanguage> {
  doc
    .alternate_languages
    .iter()
    .find(|alt| alt.lang == want_lang && alt.doc_type == want_kind)
}

/// Social-preview image search. Precedence: explicit landscape SEO image,
/// explicit square SEO image, first image-shaped value in the top-level data
/// bag, first image-shaped value found scanning each slice's `primary` then
/// `items`, and finally the site logo.
pub fn find_seo_image(doc: &Document, origin: &str) -> ImageRef {
  explicit_seo_image(doc)
    .or_else(|| top_level_image(doc))
    .or_else(|| slice_image(doc))
    .map(|img| absolutize(img, origin))
    .unwrap_or_else(|| logo_image(origin))
}

/// Hardcoded final fallback: the site logo at the social-card size.
pub fn logo_image(origin: &str) -> ImageRef {
  ImageRef {
    url: format!("{origin}/NavaPools_logo.png"),
    alt: "Nava Pools".to_string(),
    width: 1200,
    height: 630,
  }
}

fn explicit_seo_image(doc: &Document) -> Option<ImageRef> {
  doc
    .data
    .get("seo_image")
    .and_then(image_ref)
    .or_else(|| doc.data.get("seo_image_square").and_then(image_ref))
}

fn top_level_image(doc: &Document) -> Option<ImageRef> {
  let data = doc.data.as_object()?;
  data.values().find_map(image_ref)
}

fn slice_image(doc: &Document) -> Option<ImageRef> {
  let slices = slices_from_value(doc.data.get("slices").cloned()?);
  slices.iter().find_map(|slice| {
    slice
      .primary
      .values()
      .find_map(image_ref)
      .or_else(|| slice.items.iter().find_map(|item| item.values().find_map(image_ref)))
  })
}

fn absolutize(mut img: ImageRef, origin: &str) -> ImageRef {
  if img.url.starts_with('/') {
    img.url = format!("{}{}", origin.trim_end_matches('/'), img.url);
  }
  img
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  const ORIGIN: &str = "https://navapools.com";

  fn doc(json: Value) -> Document {
    serde_json::from_value(json).expect("document")
  }

  fn page_doc(data: Value) -> Document {
    doc(json!({ "id": "X", "uid": "p", "type": "page", "lang": "en-us", "data": data }))
  }

  #[test]
  fn page_view_requires_matching_kind() {
    let settings = doc(json!({
      "id": "X", "type": "settings", "lang": "en-us", "data": { "title": "not a page" }
    }));
    assert!(page_view(&settings, "page").is_none());
  }

  #[test]
  fn page_view_extracts_fields() {
    let view = page_view(
      &page_doc(json!({
        "title": [{ "text": "Pools" }],
        "description": "Quality pools",
        "slices": [
          { "slice_type": "hero_fullscreen", "primary": {}, "items": [] },
          { "slice_type": "faq", "items": [{ "question": "Q" }] }
        ]
      })),
      "page",
    )
    .expect("view");
    assert_eq!(view.title, "Pools");
    assert_eq!(view.description, "Quality pools");
    assert_eq!(view.slices.len(), 2);
    assert_eq!(view.slices[1].slice_type, "faq");
    assert!(!view.noindex);
  }

  #[test]
  fn malformed_slice_entries_are_dropped() {
    let slices = slices_from_value(json!([
      { "slice_type": "faq" },
      "not a slice",
      { "slice_type": "paragraph" }
    ]));
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[1].slice_type, "paragraph");
  }

  #[test]
  fn noindex_any_of_three_fields() {
    assert!(noindex(&page_doc(json!({ "noindex": true }))));
    assert!(noindex(&page_doc(json!({ "seo": { "noindex": true } }))));
    assert!(noindex(&page_doc(json!({ "meta": { "noindex": true } }))));
    assert!(!noindex(&page_doc(json!({ "seo": { "noindex": false } }))));
    assert!(!noindex(&page_doc(json!({}))));
  }

  #[test]
  fn pick_alternate_matches_lang_and_kind() {
    let d = doc(json!({
      "id": "X", "uid": "about", "type": "page", "lang": "en-us", "data": {},
      "alternate_languages": [
        { "id": "B1", "type": "blog", "lang": "es-us" },
        { "id": "P1", "uid": "about", "type": "page", "lang": "es-us" }
      ]
    }));
    let alt = pick_alternate(&d, "es-us", "page").expect("alternate");
    assert_eq!(alt.id, "P1");
    assert!(pick_alternate(&d, "fr-fr", "page").is_none());
    assert!(pick_alternate(&d, "es-us", "settings").is_none());
  }

  #[test]
  fn seo_image_prefers_explicit_landscape() {
    let d = page_doc(json!({
      "seo_image": { "url": "https://img.test/landscape.jpg" },
      "seo_image_square": { "url": "https://img.test/square.jpg" },
      "slices": [{ "slice_type": "image", "primary": { "image": { "url": "https://img.test/slice.jpg" } } }]
    }));
    assert_eq!(find_seo_image(&d, ORIGIN).url, "https://img.test/landscape.jpg");
  }

  #[test]
  fn seo_image_square_beats_scanned() {
    let d = page_doc(json!({
      "seo_image_square": { "url": "https://img.test/square.jpg" },
      "hero": { "url": "https://img.test/top.jpg" }
    }));
    assert_eq!(find_seo_image(&d, ORIGIN).url, "https://img.test/square.jpg");
  }

  #[test]
  fn seo_image_scans_top_level_then_slices() {
    let top = page_doc(json!({ "banner": { "url": "https://img.test/top.jpg" } }));
    assert_eq!(find_seo_image(&top, ORIGIN).url, "https://img.test/top.jpg");

    let sliced = page_doc(json!({
      "slices": [
        { "slice_type": "paragraph", "primary": { "text": "no image" } },
        { "slice_type": "benefits", "items": [{ "icon": { "url": "https://img.test/icon.png" } }] }
      ]
    }));
    assert_eq!(find_seo_image(&sliced, ORIGIN).url, "https://img.test/icon.png");
  }

  #[test]
  fn seo_image_scan_follows_document_order() {
    // Document order wins over key order when several fields are
    // image-shaped.
    let d = page_doc(json!({
      "z_banner": { "url": "https://img.test/first.jpg" },
      "a_banner": { "url": "https://img.test/second.jpg" }
    }));
    assert_eq!(find_seo_image(&d, ORIGIN).url, "https://img.test/first.jpg");
  }

  #[test]
  fn seo_image_falls_back_to_logo() {
    let d = page_doc(json!({ "title": "no images anywhere" }));
    let img = find_seo_image(&d, ORIGIN);
    assert_eq!(img.url, "https://navapools.com/NavaPools_logo.png");
    assert_eq!((img.width, img.height), (1200, 630));
  }

  #[test]
  fn seo_image_absolutizes_relative_urls() {
    let d = page_doc(json!({ "seo_image": { "url": "/media/seo.jpg" } }));
    assert_eq!(find_seo_image(&d, ORIGIN).url, "https://navapools.com/media/seo.jpg");
  }
}

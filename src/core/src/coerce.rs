/* src/core/src/coerce.rs */

//! Editorial fields arrive in more than one shape depending on how the
//! backend's custom types were configured: a title may be a plain string or
//! a rich-text block list, a link may be a bare URL or a link object. Each
//! shape pair gets an explicit sum type with one normalization function, so
//! call sites never type-narrow ad hoc.

use serde::Deserialize;
use serde_json::Value;

/// One structured rich-text block. Only the plain text is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct RichBlock {
  #[serde(default)]
  pub text: String,
}

/// A text field: either a plain string or a rich-text block list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
  Plain(String),
  Rich(Vec<RichBlock>),
}

impl TextValue {
  /// First block's text for rich fields, the string itself for plain ones.
  pub fn into_plain(self) -> String {
    match self {
      TextValue::Plain(s) => s,
      TextValue::Rich(blocks) => blocks.into_iter().next().map(|b| b.text).unwrap_or_default(),
    }
  }
}

/// A link field: either a bare URL string or an object carrying `url`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LinkValue {
  Bare(String),
  Object {
    #[serde(default)]
    url: Option<String>,
  },
}

impl LinkValue {
  pub fn into_url(self) -> String {
    match self {
      LinkValue::Bare(s) => s.trim().to_string(),
      LinkValue::Object { url } => url.map(|u| u.trim().to_string()).unwrap_or_default(),
    }
  }
}

/// An image reference surfaced to templates and social-preview metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
  pub url: String,
  pub alt: String,
  pub width: u32,
  pub height: u32,
}

/// Coerce a field out of an opaque bag: plain string, or first rich block.
pub fn coerce_text(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    Value::Array(blocks) => blocks
      .first()
      .and_then(|b| b.get("text"))
      .and_then(Value::as_str)
      .unwrap_or_default()
      .to_string(),
    _ => String::new(),
  }
}

/// Coerce a URL out of an opaque bag: bare string, object with `url`, or
/// the first element of an array of either.
pub fn coerce_url(value: &Value) -> String {
  match value {
    Value::String(s) => s.trim().to_string(),
    Value::Object(obj) => obj
      .get("url")
      .and_then(Value::as_str)
      .map(|u| u.trim().to_string())
      .unwrap_or_default(),
    Value::Array(items) => items.first().map(coerce_url).unwrap_or_default(),
    _ => String::new(),
  }
}

/// An "image-shaped" value is an object bearing a non-empty string `url`.
/// Dimensions default to the social-card size when the backend omits them.
pub fn image_ref(value: &Value) -> Option<ImageRef> {
  let obj = value.as_object()?;
  let url = obj.get("url")?.as_str()?.trim();
  if url.is_empty() {
    return None;
  }
  let alt = obj.get("alt").and_then(Value::as_str).unwrap_or_default().to_string();
  let dimensions = obj.get("dimensions");
  let read_dim = |key: &str, fallback: u32| {
    dimensions
      .and_then(|d| d.get(key))
      .and_then(Value::as_u64)
      .map_or(fallback, |v| v as u32)
  };
  Some(ImageRef {
    url: url.to_string(),
    alt,
    width: read_dim("width", 1200),
    height: read_dim("height", 630),
  })
}

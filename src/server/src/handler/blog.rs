/* src/server/src/handler/blog.rs */

//! Blog list and detail pages. These pages have no hero of their own, so
//! their background inherits from the home page's hero slice (falling back
//! to the gradient when the home page has none).

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use maud::{Markup, html};
use tracing::warn;

use navapools_content::{get_all_blogs, get_blog, get_page};
use navapools_core::normalize::{page_view, slices_from_value};
use navapools_core::{Background, Document, background, coerce_text, locale, metadata};

use super::AppState;
use super::page::wrap;
use crate::render::{background as bg_view, slices};

pub async fn handle_list(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
) -> (StatusCode, Html<String>) {
  let locale = locale::resolve(Some(&locale));
  let blogs = match get_all_blogs(&state.content, locale).await {
    Ok(blogs) => blogs,
    Err(err) => {
      warn!(%err, "blog list fetch failed");
      Vec::new()
    }
  };
  let meta =
    metadata::build(None, "page", locale, "blog", &state.config.site_url, &state.defaults);
  let bg = inherited_background(&state, locale).await;
  let content = html! {
    (bg_view::render(&bg))
    section class="blog-list" {
      h1 { "Blog" }
      ul {
        @for blog in &blogs {
          (list_entry(locale, blog))
        }
      }
    }
  };
  (StatusCode::OK, Html(wrap(&state, locale, &meta, content).await))
}

pub async fn handle_detail(
  State(state): State<Arc<AppState>>,
  Path((locale, uid)): Path<(String, String)>,
) -> (StatusCode, Html<String>) {
  let locale = locale::resolve(Some(&locale));
  let doc = match get_blog(&state.content, locale, &uid).await {
    Ok(doc) => doc,
    Err(err) => {
      warn!(%err, uid, "blog fetch failed");
      None
    }
  };
  let meta =
    metadata::build(doc.as_ref(), "blog", locale, &uid, &state.config.site_url, &state.defaults);

  let Some(doc) = doc.filter(|d| d.doc_type == "blog") else {
    let content = html! {
      section class="blog-detail" { p { "Not found" } }
    };
    return (StatusCode::NOT_FOUND, Html(wrap(&state, locale, &meta, content).await));
  };

  let bg = inherited_background(&state, locale).await;
  let title = doc.data.get("title").map(coerce_text).unwrap_or_default();
  let subtitle = doc.data.get("subtitle").map(coerce_text).unwrap_or_default();
  let content = html! {
    (bg_view::render(&bg))
    article class="blog-detail" {
      h1 { (title) }
      @if !subtitle.is_empty() { h2 class="subtitle" { (subtitle) } }
      (render_body(&doc))
    }
  };
  (StatusCode::OK, Html(wrap(&state, locale, &meta, content).await))
}

/// A blog body is either a slice sequence or a rich-text block list; decide
/// by whether every entry declares a `slice_type`.
fn render_body(doc: &Document) -> Markup {
  let body = doc.data.get("body");
  if let Some(serde_json::Value::Array(entries)) = body {
    let looks_like_slices =
      !entries.is_empty() && entries.iter().all(|e| e.get("slice_type").is_some());
    if looks_like_slices {
      return slices::render_zone(&slices_from_value(serde_json::Value::Array(entries.clone())));
    }
  }
  slices::rich_blocks(body)
}

fn list_entry(locale: &str, blog: &Document) -> Markup {
  let uid = blog.uid.as_deref().unwrap_or_default();
  let title = blog.data.get("title").map(coerce_text).unwrap_or_default();
  let subtitle = blog.data.get("subtitle").map(coerce_text).unwrap_or_default();
  let excerpt = blog.data.get("excerpt").map(coerce_text).unwrap_or_default();
  html! {
    li class="blog-entry" {
      a href={ "/" (locale) "/blog/" (uid) } {
        h2 { (title) }
        @if !subtitle.is_empty() { p class="subtitle" { (subtitle) } }
        @if !excerpt.is_empty() { p { (excerpt) } }
      }
    }
  }
}

/// The home page's hero background, or the gradient when the home page is
/// unavailable or has no hero.
async fn inherited_background(state: &AppState, locale: &str) -> Background {
  let home_hero = match get_page(&state.content, locale, "home").await {
    Ok(Some(doc)) => page_view(&doc, "page").as_ref().and_then(background::home_hero_background),
    Ok(None) => None,
    Err(err) => {
      warn!(%err, "home page fetch failed while resolving background");
      None
    }
  };
  background::resolve(None, home_hero)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn blog_doc(data: serde_json::Value) -> Document {
    serde_json::from_value(json!({
      "id": "B1", "uid": "pool-care", "type": "blog", "lang": "en-us", "data": data
    }))
    .expect("document")
  }

  #[test]
  fn body_with_slices_renders_zone() {
    let doc = blog_doc(json!({
      "body": [{ "slice_type": "paragraph", "primary": { "text": "Skim weekly." } }]
    }));
    let markup = render_body(&doc).into_string();
    assert!(markup.contains("Skim weekly."));
    assert!(markup.contains("class=\"slice paragraph\""));
  }

  #[test]
  fn body_with_rich_blocks_renders_text() {
    let doc = blog_doc(json!({
      "body": [
        { "type": "heading2", "text": "Chemistry" },
        { "type": "paragraph", "text": "Balance the pH." }
      ]
    }));
    let markup = render_body(&doc).into_string();
    assert!(markup.contains("<h2>Chemistry</h2>"));
    assert!(markup.contains("<p>Balance the pH.</p>"));
  }

  #[test]
  fn body_missing_renders_empty() {
    let doc = blog_doc(json!({}));
    assert_eq!(render_body(&doc).into_string(), "");
  }

  #[test]
  fn list_entry_links_localized() {
    let doc = blog_doc(json!({ "title": [{ "text": "Pool care" }], "excerpt": "Tips" }));
    let markup = list_entry("es", &doc).into_string();
    assert!(markup.contains("href=\"/es/blog/pool-care\""));
    assert!(markup.contains("Pool care"));
    assert!(markup.contains("Tips"));
  }
}

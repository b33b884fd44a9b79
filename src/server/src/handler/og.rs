/* src/server/src/handler/og.rs */

//! Social-preview document served to crawlers in place of the real page.
//! The crawler middleware rewrites page requests here, carrying the
//! originally requested path so og:url points at the canonical page.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use maud::{DOCTYPE, Markup, html};
use serde::Deserialize;

use navapools_core::normalize::logo_image;
use navapools_core::{DEFAULT_LOCALE, SiteDefaults, metadata};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct OgQuery {
  #[serde(rename = "originalPath", default)]
  pub original_path: Option<String>,
}

pub async fn handle_og(
  State(state): State<Arc<AppState>>,
  Query(query): Query<OgQuery>,
) -> Html<String> {
  let path = query.original_path.as_deref().unwrap_or("/");
  Html(og_document(&state.config.site_url, &state.defaults, path).into_string())
}

fn og_document(origin: &str, defaults: &SiteDefaults, original_path: &str) -> Markup {
  let origin = origin.trim_end_matches('/');
  let meta = metadata::build(None, "page", DEFAULT_LOCALE, "", origin, defaults);
  let page_url = format!("{origin}{original_path}");
  let image = logo_image(origin);
  html! {
    (DOCTYPE)
    html {
      head {
        meta charset="utf-8";
        title { (meta.title) }
        meta property="og:type" content="website";
        meta property="og:title" content=(meta.title);
        meta property="og:description" content=(meta.description);
        meta property="og:url" content=(page_url);
        meta property="og:image" content=(image.url);
        meta property="og:image:width" content=(image.width);
        meta property="og:image:height" content=(image.height);
        meta name="twitter:card" content="summary_large_image";
        meta name="twitter:title" content=(meta.title);
        meta name="twitter:description" content=(meta.description);
        meta name="twitter:image" content=(image.url);
      }
      body {
        h1 { (meta.title) }
        p { (meta.description) }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn carries_original_path_into_og_url() {
    let doc =
      og_document("https://navapools.com", &SiteDefaults::default(), "/en/services").into_string();
    assert!(doc.contains(r#"property="og:url" content="https://navapools.com/en/services""#));
    assert!(doc.contains(r#"name="twitter:card" content="summary_large_image""#));
  }

  #[test]
  fn uses_site_logo_as_preview_image() {
    let doc = og_document("https://navapools.com/", &SiteDefaults::default(), "/").into_string();
    assert!(doc.contains("https://navapools.com/NavaPools_logo.png"));
    assert!(doc.contains(r#"content="1200""#));
  }
}

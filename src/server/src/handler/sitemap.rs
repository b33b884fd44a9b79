/* src/server/src/handler/sitemap.rs */

//! Sitemap and robots endpoints. The sitemap enumerates both locales from
//! the content backend and is cached process-wide; `X-Cache` reports
//! whether a request was served from the cached document.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};

use navapools_content::get_all_pages;
use navapools_core::sitemap::{SitemapUrl, lastmod_from, render};
use navapools_core::{SUPPORTED_LOCALES, metadata};

use super::AppState;

pub async fn handle_sitemap(State(state): State<Arc<AppState>>) -> Response {
  if let Some(xml) = state.sitemap.get() {
    return xml_response(xml, "HIT");
  }

  let origin = state.config.site_url.as_str();
  let mut urls = Vec::new();
  for locale in SUPPORTED_LOCALES {
    urls.push(SitemapUrl { loc: metadata::canonical_url(origin, locale, ""), lastmod: None });
    let pages = match get_all_pages(&state.content, locale).await {
      Ok(pages) => pages,
      Err(err) => {
        tracing::error!(%err, locale, "sitemap generation failed");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Error generating sitemap").into_response();
      }
    };
    for page in pages {
      let Some(uid) = page.uid.as_deref() else { continue };
      urls.push(SitemapUrl {
        loc: metadata::canonical_url(origin, locale, uid),
        lastmod: page.modified_at().and_then(lastmod_from),
      });
    }
  }

  let xml = render(&urls);
  state.sitemap.set(xml.clone());
  xml_response(xml, "MISS")
}

fn xml_response(xml: String, cache: &'static str) -> Response {
  (
    [
      (header::CONTENT_TYPE, "application/xml"),
      (HeaderName::from_static("x-cache"), cache),
    ],
    xml,
  )
    .into_response()
}

pub async fn handle_robots(State(state): State<Arc<AppState>>) -> Response {
  ([(header::CONTENT_TYPE, "text/plain")], robots_body(&state.config.site_url)).into_response()
}

fn robots_body(site_url: &str) -> String {
  let origin = site_url.trim_end_matches('/');
  let host = origin.trim_start_matches("https://").trim_start_matches("http://");
  format!("User-agent: *\nDisallow:\n\nSitemap: {origin}/sitemap.xml\n\nHost: {host}\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_xml_is_marked_miss() {
    let response = xml_response("<urlset/>".to_string(), "MISS");
    assert_eq!(response.headers().get("x-cache").and_then(|v| v.to_str().ok()), Some("MISS"));
    assert_eq!(
      response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
      Some("application/xml")
    );
  }

  #[test]
  fn robots_allows_everything_and_names_sitemap() {
    let body = robots_body("https://navapools.com/");
    assert!(body.contains("User-agent: *\nDisallow:\n"));
    assert!(body.contains("Sitemap: https://navapools.com/sitemap.xml"));
    assert!(body.contains("Host: navapools.com"));
  }
}

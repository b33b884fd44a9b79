/* src/server/src/middleware.rs */

//! Crawler rewrite: recognized crawler user-agents requesting a page route
//! get their request URI rewritten to the metadata-only endpoint before
//! routing, so social scrapers receive OG tags without rendering the full
//! page. Everything else continues through normal locale-aware routing.

use axum::extract::Request;
use axum::http::{Method, Uri, header};
use tower::util::MapRequestLayer;
use tracing::debug;

use navapools_core::bot;
use navapools_core::locale::SUPPORTED_LOCALES;

pub fn crawler_rewrite_layer() -> MapRequestLayer<fn(Request) -> Request> {
  MapRequestLayer::new(rewrite_crawlers)
}

pub fn rewrite_crawlers(mut req: Request) -> Request {
  if req.method() != Method::GET {
    return req;
  }
  let user_agent = req
    .headers()
    .get(header::USER_AGENT)
    .and_then(|v| v.to_str().ok())
    .unwrap_or_default();
  if !bot::is_crawler(user_agent) {
    return req;
  }
  if !is_page_path(req.uri().path()) {
    // Crawlers still need robots.txt, the sitemap, and the API surface.
    return req;
  }
  let original = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
  let target = bot::rewrite_target(original);
  if let Ok(uri) = target.parse::<Uri>() {
    debug!(original, target, "crawler rewrite");
    *req.uri_mut() = uri;
  }
  req
}

/// Page routes are `/` and anything under a locale prefix.
fn is_page_path(path: &str) -> bool {
  if path == "/" {
    return true;
  }
  let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
  SUPPORTED_LOCALES.contains(&first)
}

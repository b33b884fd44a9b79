/* src/server/src/handler/mod.rs */

mod blog;
mod contact;
mod og;
mod page;
mod sitemap;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use navapools_content::ContentClient;
use navapools_core::SitemapCache;
use navapools_core::metadata::SiteDefaults;

use crate::config::Config;
use crate::email::Mailer;

pub struct AppState {
  pub config: Config,
  pub content: ContentClient,
  pub sitemap: SitemapCache,
  pub mailer: Mailer,
  pub defaults: SiteDefaults,
}

impl AppState {
  pub fn new(config: Config) -> Self {
    let http = reqwest::Client::new();
    let content = ContentClient::new(config.content_api_url.clone(), http.clone());
    let sitemap = SitemapCache::new(Duration::from_secs(config.sitemap_ttl_secs));
    let mailer = Mailer::new(config.email.clone(), http);
    Self { config, content, sitemap, mailer, defaults: SiteDefaults::default() }
  }
}

pub fn build_router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/", get(page::handle_root))
    .route("/robots.txt", get(sitemap::handle_robots))
    .route("/sitemap.xml", get(sitemap::handle_sitemap))
    .route("/api/og", get(og::handle_og))
    .route("/api/contact", post(contact::handle_contact))
    .route("/{locale}", get(page::handle_home))
    .route("/{locale}/contact", get(page::handle_contact_page))
    .route("/{locale}/blog", get(blog::handle_list))
    .route("/{locale}/blog/{uid}", get(blog::handle_detail))
    .route("/{locale}/{uid}", get(page::handle_page))
    .nest_service("/public", ServeDir::new("public"))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

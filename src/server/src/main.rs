/* src/server/src/main.rs */

use std::sync::Arc;

use axum::ServiceExt;
use axum::extract::Request;
use tokio::net::TcpListener;
use tower::Layer;
use tracing::info;

use navapools_server::handler::{AppState, build_router};
use navapools_server::middleware::crawler_rewrite_layer;
use navapools_server::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "navapools=info,tower_http=info".into()),
    )
    .init();

  let config = Config::from_env();
  let addr = config.bind_addr();
  let state = Arc::new(AppState::new(config));

  // Crawler rewrites must run before routing, so the layer wraps the whole
  // router instead of being added with Router::layer.
  let router = build_router(state);
  let app = crawler_rewrite_layer().layer(router);

  let listener = TcpListener::bind(&addr).await?;
  info!(%addr, "navapools server listening");
  axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
  Ok(())
}

/* src/server/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use navapools_core::SiteError;

/// Newtype wrapper to implement `IntoResponse` for `SiteError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for
/// SiteError` when both types are foreign to this crate.
pub struct ApiError(pub SiteError);

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match err.details() {
      Some(details) => serde_json::json!({ "error": err.message(), "details": details }),
      None => serde_json::json!({ "error": err.message() }),
    };
    (status, axum::Json(body)).into_response()
  }
}

impl From<SiteError> for ApiError {
  fn from(err: SiteError) -> Self {
    Self(err)
  }
}

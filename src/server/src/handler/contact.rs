/* src/server/src/handler/contact.rs */

//! Contact-submission endpoint. Two intents share it: direct contact and a
//! newsletter-style subscription. Confirmation emails to the submitter are
//! deliberately not sent; the provider plan's delivery quota is reserved
//! for admin notifications.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use maud::html;
use serde::Deserialize;

use navapools_core::SiteError;

use super::AppState;
use crate::email::Email;
use crate::error::ApiError;

const SUBSCRIBE_MARKER: &str = "subscribe";

#[derive(Debug, Deserialize)]
pub struct ContactSubmission {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub message: String,
  #[serde(rename = "type", default)]
  pub kind: Option<String>,
  #[serde(default)]
  pub locale: Option<String>,
}

pub async fn handle_contact(
  State(state): State<Arc<AppState>>,
  Json(submission): Json<ContactSubmission>,
) -> Result<Json<serde_json::Value>, ApiError> {
  validate(&submission)?;
  let email = build_email(&submission);
  state.mailer.send(&email).await?;
  Ok(Json(serde_json::json!({ "ok": true })))
}

/// All of name/email/message must be non-empty after trimming. The error
/// names each missing field.
fn validate(submission: &ContactSubmission) -> Result<(), SiteError> {
  let mut missing = Vec::new();
  if submission.name.trim().is_empty() {
    missing.push("name");
  }
  if submission.email.trim().is_empty() {
    missing.push("email");
  }
  if submission.message.trim().is_empty() {
    missing.push("message");
  }
  if missing.is_empty() {
    Ok(())
  } else {
    Err(SiteError::validation("Missing fields").with_details(missing.join(", ")))
  }
}

fn build_email(submission: &ContactSubmission) -> Email {
  let email = submission.email.trim();
  if submission.kind.as_deref() == Some(SUBSCRIBE_MARKER) {
    // Minimal admin notice; no confirmation to the submitter.
    let html = html! {
      p { strong { "Subscription request: " } (email) }
    };
    return Email {
      subject: "New subscription".to_string(),
      html: html.into_string(),
      reply_to: None,
    };
  }
  let name = submission.name.trim();
  let html = html! {
    p { strong { "Name: " } (name) }
    p { strong { "Email: " } (email) }
    p { (submission.message.trim()) }
  };
  Email {
    subject: format!("Website contact from {name}"),
    html: html.into_string(),
    reply_to: Some(email.to_string()),
  }
}

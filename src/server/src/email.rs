/* src/server/src/email.rs */

//! Transactional-email client over the provider's HTTP API. Missing
//! configuration fails fast naming the variable; provider failures surface
//! their response body with the API key scrubbed out.

use serde::Serialize;
use tracing::error;

use navapools_core::SiteError;

use crate::config::EmailConfig;

const SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug)]
pub struct Email {
  pub subject: String,
  pub html: String,
  pub reply_to: Option<String>,
}

#[derive(Serialize)]
struct Address<'a> {
  email: &'a str,
}

#[derive(Serialize)]
struct Personalization<'a> {
  to: Vec<Address<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
  #[serde(rename = "type")]
  content_type: &'a str,
  value: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a> {
  personalizations: Vec<Personalization<'a>>,
  from: Address<'a>,
  subject: &'a str,
  content: Vec<Content<'a>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  reply_to: Option<Address<'a>>,
}

pub struct Mailer {
  http: reqwest::Client,
  config: EmailConfig,
}

impl Mailer {
  pub fn new(config: EmailConfig, http: reqwest::Client) -> Self {
    Self { http, config }
  }

  pub async fn send(&self, email: &Email) -> Result<(), SiteError> {
    let api_key = require(self.config.api_key.as_deref(), "SENDGRID_API_KEY")?;
    let from = require(self.config.from.as_deref(), "SENDGRID_FROM")?;
    let to = require(self.config.to.as_deref(), "SENDGRID_TO")?;

    let request = SendRequest {
      personalizations: vec![Personalization { to: vec![Address { email: to }] }],
      from: Address { email: from },
      subject: &email.subject,
      content: vec![Content { content_type: "text/html", value: &email.html }],
      reply_to: email.reply_to.as_deref().map(|email| Address { email }),
    };

    let response = self
      .http
      .post(SEND_URL)
      .bearer_auth(api_key)
      .json(&request)
      .send()
      .await
      .map_err(|e| SiteError::internal("Failed to send").with_details(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
      return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    let detail = scrub(&body, api_key);
    error!(%status, detail, "email provider rejected send");
    Err(SiteError::internal("Failed to send").with_details(format!("provider {status}: {detail}")))
  }
}

fn require<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, SiteError> {
  value.ok_or_else(|| SiteError::config(format!("{name} is not set")))
}

/// Strip the secret out of provider error bodies before they leave the
/// process.
fn scrub(body: &str, api_key: &str) -> String {
  if api_key.is_empty() {
    return body.to_string();
  }
  body.replace(api_key, "[redacted]")
}

/* src/server/src/config.rs */

//! Environment-driven configuration. Everything carries a hardcoded
//! fallback except the email settings, which stay optional and fail at
//! request time naming the missing variable (a deployment mistake should
//! be loud, not silently degraded).

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
  pub host: String,
  pub port: u16,
  /// Absolute site origin used for canonical URLs, sitemap locs, and
  /// absolute-izing relative media URLs.
  pub site_url: String,
  /// Content backend repository API root.
  pub content_api_url: String,
  pub sitemap_ttl_secs: u64,
  pub email: EmailConfig,
  pub business: BusinessConfig,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
  pub api_key: Option<String>,
  pub from: Option<String>,
  /// Admin recipient for contact notifications.
  pub to: Option<String>,
}

/// Business contact details surfaced in the LocalBusiness structured data.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
  pub phone: String,
  pub email: String,
  pub street_address: String,
  pub postal_code: String,
  pub latitude: String,
  pub longitude: String,
  pub opening_hours: String,
}

fn var_or(name: &str, fallback: &str) -> String {
  env::var(name).ok().filter(|v| !v.is_empty()).unwrap_or_else(|| fallback.to_string())
}

fn var_opt(name: &str) -> Option<String> {
  env::var(name).ok().filter(|v| !v.is_empty())
}

impl Config {
  pub fn from_env() -> Self {
    Self {
      host: var_or("HOST", "0.0.0.0"),
      port: var_or("PORT", "3000").parse().unwrap_or(3000),
      site_url: var_or("SITE_URL", "https://navapools.com").trim_end_matches('/').to_string(),
      content_api_url: var_or("CONTENT_API_URL", "https://navapools.cdn.prismic.io/api/v2"),
      sitemap_ttl_secs: var_or("SITEMAP_TTL", "3600").parse().unwrap_or(3600),
      email: EmailConfig {
        api_key: var_opt("SENDGRID_API_KEY"),
        from: var_opt("SENDGRID_FROM"),
        to: var_opt("SENDGRID_TO"),
      },
      business: BusinessConfig {
        phone: var_or("BUSINESS_PHONE", "+1-407-555-0199"),
        email: var_or("BUSINESS_EMAIL", "info@navapools.com"),
        street_address: var_or("BUSINESS_STREET_ADDRESS", "Orlando, FL"),
        postal_code: var_or("BUSINESS_POSTAL_CODE", "328xx"),
        latitude: var_or("BUSINESS_LATITUDE", "28.538336"),
        longitude: var_or("BUSINESS_LONGITUDE", "-81.379234"),
        opening_hours: var_or("BUSINESS_OPENING_HOURS", "Mo-Fr 09:00-17:00"),
      },
    }
  }

  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bind_addr_joins_host_and_port() {
    let mut config = Config::from_env();
    config.host = "127.0.0.1".to_string();
    config.port = 8080;
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
  }
}

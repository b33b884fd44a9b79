/* src/core/src/bot.rs */

//! Crawler classification for the social-preview rewrite. Binary decision:
//! recognized crawler user-agents on GET are served the metadata-only
//! document instead of the full page.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// Known crawler signatures, matched case-insensitively as substrings.
pub const CRAWLER_SIGNATURES: [&str; 11] = [
  "twitterbot",
  "facebookexternalhit",
  "linkedinbot",
  "slackbot",
  "discordbot",
  "telegrambot",
  "whatsapp",
  "pinterestbot",
  "googlebot",
  "bingbot",
  "applebot",
];

pub fn is_crawler(user_agent: &str) -> bool {
  let ua = user_agent.to_ascii_lowercase();
  CRAWLER_SIGNATURES.iter().any(|sig| ua.contains(sig))
}

/// Rewrite target for a matched crawler: the metadata-only endpoint with
/// the original path+query preserved as a parameter.
pub fn rewrite_target(original_path: &str) -> String {
  let encoded = utf8_percent_encode(original_path, NON_ALPHANUMERIC);
  format!("/api/og?originalPath={encoded}")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn recognizes_known_signatures() {
    assert!(is_crawler("Twitterbot/1.0"));
    assert!(is_crawler("facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)"));
    assert!(is_crawler("Mozilla/5.0 (compatible; Discordbot/2.0; +https://discordapp.com)"));
    assert!(is_crawler("WhatsApp/2.23.2"));
  }

  #[test]
  fn match_is_case_insensitive() {
    assert!(is_crawler("TWITTERBOT"));
    assert!(is_crawler("mozilla LinkedInBot mozilla"));
  }

  #[test]
  fn browsers_pass_through() {
    assert!(!is_crawler(
      "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 Chrome/120.0 Safari/537.36"
    ));
    assert!(!is_crawler(""));
  }

  #[test]
  fn rewrite_target_encodes_path_and_query() {
    assert_eq!(
      rewrite_target("/en/services?ref=home"),
      "/api/og?originalPath=%2Fen%2Fservices%3Fref%3Dhome"
    );
  }
}

/* src/core/src/locale.rs */

//! Short URL locale codes and the content backend's full language tags.
//! URLs carry `en`/`es`; the backend speaks `en-us`/`es-us`.

pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "es"];
pub const DEFAULT_LOCALE: &str = "en";

pub const DEFAULT_LANG: &str = "en-us";

/// Total resolver: any input maps to a supported locale, unknown or absent
/// input maps to the default.
pub fn resolve(input: Option<&str>) -> &'static str {
  let Some(input) = input else {
    return DEFAULT_LOCALE;
  };
  let normalized = input.trim().to_ascii_lowercase();
  SUPPORTED_LOCALES.iter().find(|l| **l == normalized).copied().unwrap_or(DEFAULT_LOCALE)
}

/// Map a short locale code to the backend language tag. Inputs that already
/// look like a full tag (contain a hyphen) pass through lowercased.
pub fn to_lang(locale: &str) -> String {
  let normalized = locale.trim().to_ascii_lowercase();
  if normalized.contains('-') {
    return normalized;
  }
  match normalized.as_str() {
    "en" => "en-us".to_string(),
    "es" => "es-us".to_string(),
    _ => DEFAULT_LANG.to_string(),
  }
}

/// Short code from a backend language tag: the text before the first hyphen.
pub fn short_code(lang: &str) -> &str {
  lang.split('-').next().unwrap_or(lang)
}

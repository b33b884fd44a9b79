/* src/core/src/metadata.rs */

//! Derives per-request SEO metadata (title, description, canonical,
//! hreflang alternates, social-preview image, robots directive) from a
//! normalized document, with hardcoded final fallbacks.

use std::collections::BTreeMap;

use crate::coerce::{ImageRef, coerce_text};
use crate::document::Document;
use crate::locale::{SUPPORTED_LOCALES, short_code};
use crate::normalize::{find_seo_image, logo_image, noindex};

/// Fixed site-level fallbacks used when a document is absent or silent.
#[derive(Debug, Clone)]
pub struct SiteDefaults {
  pub title: String,
  pub description: String,
}

impl Default for SiteDefaults {
  fn default() -> Self {
    Self {
      title: "Nava Pools".to_string(),
      description: "Nava Pools - Pool builders and services in Orlando, Florida.".to_string(),
    }
  }
}

/// Request-scoped metadata; built fresh per request, never persisted.
#[derive(Debug, Clone)]
pub struct PageMetadata {
  pub title: String,
  pub description: String,
  pub canonical: String,
  /// Short locale code -> absolute URL.
  pub alternates: BTreeMap<String, String>,
  pub social_image: ImageRef,
  pub robots: String,
}

/// Canonical URL for a locale-prefixed page. The home page has no uid
/// segment.
pub fn canonical_url(origin: &str, locale: &str, uid: &str) -> String {
  let origin = origin.trim_end_matches('/');
  if uid.is_empty() || uid == "home" {
    format!("{origin}/{locale}")
  } else {
    format!("{origin}/{locale}/{uid}")
  }
}

/// Canonical URL for a document of the given kind. Blog posts live under
/// the locale's `blog` segment; everything else sits directly under the
/// locale.
pub fn document_url(origin: &str, locale: &str, kind: &str, uid: &str) -> String {
  if kind == "blog" {
    format!("{}/{locale}/blog/{uid}", origin.trim_end_matches('/'))
  } else {
    canonical_url(origin, locale, uid)
  }
}

pub fn build(
  doc: Option<&Document>,
  expected_kind: &str,
  locale: &str,
  uid: &str,
  origin: &str,
  defaults: &SiteDefaults,
) -> PageMetadata {
  let canonical = document_url(origin, locale, expected_kind, uid);

  let Some(doc) = doc.filter(|d| d.doc_type == expected_kind) else {
    return fallback(origin, canonical, defaults);
  };

  let title = doc
    .data
    .get("title")
    .map(coerce_text)
    .filter(|t| !t.is_empty())
    .unwrap_or_else(|| defaults.title.clone());
  let description = doc
    .data
    .get("description")
    .map(coerce_text)
    .filter(|d| !d.is_empty())
    .unwrap_or_else(|| defaults.description.clone());

  let mut alternates = BTreeMap::new();
  for alt in &doc.alternate_languages {
    let short = short_code(&alt.lang);
    let alt_uid = alt.uid.as_deref().unwrap_or(uid);
    alternates.insert(short.to_string(), document_url(origin, short, &alt.doc_type, alt_uid));
  }
  // The current locale always maps to the current canonical URL.
  alternates.insert(locale.to_string(), canonical.clone());

  let robots =
    if noindex(doc) { "noindex,nofollow".to_string() } else { "index,follow".to_string() };

  PageMetadata {
    title,
    description,
    canonical,
    alternates,
    social_image: find_seo_image(doc, origin),
    robots,
  }
}

/// Metadata for a total fetch failure: site defaults, with the supported
/// locales pointing at their respective home pages.
fn fallback(origin: &str, canonical: String, defaults: &SiteDefaults) -> PageMetadata {
  let alternates = SUPPORTED_LOCALES
    .iter()
    .map(|l| ((*l).to_string(), canonical_url(origin, l, "")))
    .collect();
  PageMetadata {
    title: defaults.title.clone(),
    description: defaults.description.clone(),
    canonical,
    alternates,
    social_image: logo_image(origin),
    robots: "index,follow".to_string(),
  }
}

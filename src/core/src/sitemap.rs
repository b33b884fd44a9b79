/* src/core/src/sitemap.rs */

//! Sitemap XML rendering and the process-wide TTL cache. The cache is an
//! injected service constructed once at startup; the mutex guards the slot,
//! not regeneration, so concurrent misses may each rebuild (cheap, never
//! incorrect).

use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::{DateTime, SecondsFormat};

#[derive(Debug, Clone)]
pub struct SitemapUrl {
  pub loc: String,
  /// RFC 3339 last-modified timestamp, when the backend supplied one.
  pub lastmod: Option<String>,
}

/// Normalize a backend publication timestamp to RFC 3339 UTC. Unparseable
/// input is dropped rather than emitted verbatim.
pub fn lastmod_from(raw: &str) -> Option<String> {
  DateTime::parse_from_rfc3339(raw)
    .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
    .ok()
    .map(|dt| dt.to_utc().to_rfc3339_opts(SecondsFormat::Secs, true))
}

pub fn render(urls: &[SitemapUrl]) -> String {
  let mut xml = String::from(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
  );
  for url in urls {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&url.loc)));
    if let Some(lastmod) = &url.lastmod {
      xml.push_str(&format!("    <lastmod>{}</lastmod>\n", xml_escape(lastmod)));
    }
    xml.push_str("  </url>\n");
  }
  xml.push_str("</urlset>\n");
  xml
}

fn xml_escape(s: &str) -> String {
  s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

struct Slot {
  xml: String,
  expires_at: Instant,
}

/// Time-boxed cache of the generated sitemap document.
pub struct SitemapCache {
  ttl: Duration,
  slot: Mutex<Option<Slot>>,
}

impl SitemapCache {
  pub fn new(ttl: Duration) -> Self {
    Self { ttl, slot: Mutex::new(None) }
  }

  pub fn get(&self) -> Option<String> {
    self.get_at(Instant::now())
  }

  pub fn set(&self, xml: String) {
    self.set_at(xml, Instant::now());
  }

  /// Clock-injected variant for tests.
  pub fn get_at(&self, now: Instant) -> Option<String> {
    let guard = match self.slot.lock() {
      Ok(g) => g,
      Err(poisoned) => poisoned.into_inner(),
    };
    guard.as_ref().filter(|s| s.expires_at > now).map(|s| s.xml.clone())
  }

  pub fn set_at(&self, xml: String, now: Instant) {
    let mut guard = match self.slot.lock() {
      Ok(g) => g,
      Err(poisoned) => poisoned.into_inner(),
    };
    *guard = Some(Slot { xml, expires_at: now + self.ttl });
  }
}

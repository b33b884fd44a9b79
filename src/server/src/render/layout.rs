/* src/server/src/render/layout.rs */

//! Document shell: head metadata (canonical, hreflang alternates, Open
//! Graph/Twitter cards, robots), header with logo and navigation, footer,
//! and the LocalBusiness structured data block.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use navapools_content::{Navigation, Settings};
use navapools_core::PageMetadata;

use crate::config::BusinessConfig;

pub struct Shell<'a> {
  pub meta: &'a PageMetadata,
  pub locale: &'a str,
  pub settings: &'a Settings,
  pub navigation: &'a Navigation,
  pub business: &'a BusinessConfig,
  pub origin: &'a str,
}

pub fn page(shell: &Shell<'_>, content: Markup) -> Markup {
  let meta = shell.meta;
  html! {
    (DOCTYPE)
    html lang=(shell.locale) {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (meta.title) }
        meta name="description" content=(meta.description);
        meta name="robots" content=(meta.robots);
        link rel="canonical" href=(meta.canonical);
        @for (locale, href) in &meta.alternates {
          link rel="alternate" hreflang=(locale) href=(href);
        }
        meta property="og:type" content="website";
        meta property="og:site_name" content=(shell.settings.site_name);
        meta property="og:title" content=(meta.title);
        meta property="og:description" content=(meta.description);
        meta property="og:url" content=(meta.canonical);
        meta property="og:image" content=(meta.social_image.url);
        meta property="og:image:width" content=(meta.social_image.width);
        meta property="og:image:height" content=(meta.social_image.height);
        meta name="twitter:card" content="summary_large_image";
        meta name="twitter:title" content=(meta.title);
        meta name="twitter:description" content=(meta.description);
        meta name="twitter:image" content=(meta.social_image.url);
        link rel="preload" href="/public/NavaPools_logo.png" as="image";
      }
      body {
        header class="site-header" {
          a class="site-logo" href={ "/" (shell.locale) } {
            img src="/public/NavaPools_logo.png" alt=(shell.settings.site_name) width="700" height="232";
          }
          nav class="site-nav" {
            ul {
              @for item in &shell.navigation.items {
                li { a href=(item.url) { (item.label) } }
              }
            }
          }
        }
        main { (content) }
        (structured_data(shell))
        footer class="site-footer" { (shell.settings.footer_text) }
      }
    }
  }
}

/// JSON-LD LocalBusiness block. Values come from configuration and the
/// settings document, serialized through serde_json so the script body is
/// well-formed regardless of content.
fn structured_data(shell: &Shell<'_>) -> Markup {
  let business = shell.business;
  let json = serde_json::json!({
    "@context": "https://schema.org",
    "@type": "LocalBusiness",
    "name": shell.settings.site_name,
    "description": shell.meta.description,
    "url": shell.origin,
    "image": format!("{}/NavaPools_logo.png", shell.origin),
    "telephone": business.phone,
    "email": business.email,
    "address": {
      "@type": "PostalAddress",
      "streetAddress": business.street_address,
      "addressLocality": "Orlando",
      "addressRegion": "FL",
      "postalCode": business.postal_code,
      "addressCountry": "US"
    },
    "geo": {
      "@type": "GeoCoordinates",
      "latitude": business.latitude,
      "longitude": business.longitude
    },
    "openingHours": business.opening_hours
  });
  let body = serde_json::to_string(&json).unwrap_or_default();
  // `<` must not appear un-escaped inside a script element.
  let body = body.replace('<', "\\u003c");
  html! {
    script type="application/ld+json" { (PreEscaped(body)) }
  }
}

/* src/core/src/lib.rs */

pub mod background;
pub mod bot;
pub mod coerce;
pub mod document;
pub mod errors;
pub mod locale;
pub mod metadata;
pub mod normalize;
pub mod sitemap;

// Re-exports for ergonomic use
pub use background::Background;
pub use coerce::{ImageRef, LinkValue, TextValue, coerce_text, coerce_url, image_ref};
pub use document::{AlternateLanguage, Document};
pub use errors::SiteError;
pub use locale::{DEFAULT_LOCALE, SUPPORTED_LOCALES, resolve, short_code, to_lang};
pub use metadata::{PageMetadata, SiteDefaults};
pub use normalize::{PageView, Slice, find_seo_image, page_view, pick_alternate};
pub use sitemap::{SitemapCache, SitemapUrl};

/* src/core/src/background.rs */

//! Display-background selection. Precedence: explicit video, explicit image,
//! the home page's hero background, flat gradient. Some branch always yields
//! a renderable background.

use serde_json::{Map, Value};

use crate::coerce::{ImageRef, coerce_url, image_ref};
use crate::normalize::PageView;

pub const HERO_SLICE_TYPE: &str = "hero_fullscreen";

#[derive(Debug, Clone, PartialEq)]
pub enum Background {
  Video { desktop: String, mobile: Option<String> },
  Image(ImageRef),
  Gradient,
}

impl Background {
  /// Active video source for the viewport. Mobile prefers the distinct
  /// mobile URL when present, else the desktop one.
  pub fn video_src(&self, mobile: bool) -> Option<&str> {
    match self {
      Background::Video { desktop, mobile: mobile_url } => {
        if mobile {
          Some(mobile_url.as_deref().unwrap_or(desktop))
        } else {
          Some(desktop)
        }
      }
      _ => None,
    }
  }
}

/// Extract a background from a slice's `primary` bag. The video field may be
/// a bare string or a link object; empty-after-trim counts as absent.
pub fn from_primary(primary: &Map<String, Value>) -> Option<Background> {
  let video = primary.get("video_url").map(coerce_url).unwrap_or_default();
  if !video.is_empty() {
    let mobile = primary
      .get("mobile_video_url")
      .map(coerce_url)
      .filter(|u| !u.is_empty());
    return Some(Background::Video { desktop: video, mobile });
  }
  primary.get("background_image").and_then(image_ref).map(Background::Image)
}

/// Resolve the active background: the page's own, else the inherited home
/// hero, else the gradient placeholder.
pub fn resolve(own: Option<Background>, home_hero: Option<Background>) -> Background {
  own.or(home_hero).unwrap_or(Background::Gradient)
}

/// Background of the home page's hero slice, when the home page has one.
pub fn home_hero_background(home: &PageView) -> Option<Background> {
  home
    .slices
    .iter()
    .find(|s| s.slice_type == HERO_SLICE_TYPE)
    .and_then(|s| from_primary(&s.primary))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::normalize::slices_from_value;
  use serde_json::json;

  fn primary(json: Value) -> Map<String, Value> {
    json.as_object().expect("object").clone()
  }

  #[test]
  fn video_beats_image() {
    let bg = from_primary(&primary(json!({
      "video_url": "https://cdn.test/pool.mp4",
      "background_image": { "url": "https://cdn.test/pool.jpg" }
    })))
    .expect("background");
    assert_eq!(bg.video_src(false), Some("https://cdn.test/pool.mp4"));
  }

  #[test]
  fn mobile_viewport_prefers_mobile_url() {
    let bg = from_primary(&primary(json!({
      "video_url": { "link_type": "Media", "url": "https://cdn.test/wide.mp4" },
      "mobile_video_url": "https://cdn.test/tall.mp4"
    })))
    .expect("background");
    assert_eq!(bg.video_src(true), Some("https://cdn.test/tall.mp4"));
    assert_eq!(bg.video_src(false), Some("https://cdn.test/wide.mp4"));
  }

  #[test]
  fn mobile_falls_back_to_desktop_url() {
    let bg = from_primary(&primary(json!({ "video_url": "https://cdn.test/only.mp4" })))
      .expect("background");
    assert_eq!(bg.video_src(true), Some("https://cdn.test/only.mp4"));
  }

  #[test]
  fn blank_video_selects_image() {
    let bg = from_primary(&primary(json!({
      "video_url": "   ",
      "background_image": { "url": "https://cdn.test/pool.jpg", "alt": "Pool" }
    })))
    .expect("background");
    match bg {
      Background::Image(img) => assert_eq!(img.url, "https://cdn.test/pool.jpg"),
      other => panic!("expected image, got {other:?}"),
    }
  }

  #[test]
  fn empty_primary_has_no_background() {
    assert!(from_primary(&Map::new()).is_none());
  }

  #[test]
  fn resolve_inherits_home_hero() {
    let hero = Background::Video { desktop: "https://cdn.test/hero.mp4".into(), mobile: None };
    assert_eq!(resolve(None, Some(hero.clone())), hero);
  }

  #[test]
  fn resolve_own_wins_over_inherited() {
    let own = Background::Image(ImageRef {
      url: "https://cdn.test/own.jpg".into(),
      alt: String::new(),
      width: 1200,
      height: 630,
    });
    let hero = Background::Gradient;
    assert_eq!(resolve(Some(own.clone()), Some(hero)), own);
  }

  #[test]
  fn resolve_gradient_when_nothing_set() {
    assert_eq!(resolve(None, None), Background::Gradient);
  }

  #[test]
  fn home_hero_scan_finds_hero_slice() {
    let slices = slices_from_value(json!([
      { "slice_type": "trust_bar", "primary": {} },
      { "slice_type": "hero_fullscreen", "primary": { "video_url": "https://cdn.test/hero.mp4" } }
    ]));
    let home = PageView { slices, ..PageView::default() };
    let bg = home_hero_background(&home).expect("hero background");
    assert_eq!(bg.video_src(false), Some("https://cdn.test/hero.mp4"));
  }

  #[test]
  fn home_hero_scan_tolerates_missing_hero() {
    let home = PageView::default();
    assert!(home_hero_background(&home).is_none());
  }
}

/* src/server/src/render/background.rs */

use maud::{Markup, html};

use navapools_core::Background;

/// Full-bleed page background: video, image, or the gradient placeholder,
/// always under a darkening overlay so foreground text stays readable.
pub fn render(background: &Background) -> Markup {
  html! {
    div class="page-background" {
      @match background {
        Background::Video { desktop, mobile } => {
          video class="background-video" autoplay muted loop playsinline {
            @if let Some(mobile) = mobile {
              source src=(mobile) media="(max-width: 768px)";
            }
            source src=(desktop);
          }
        }
        Background::Image(image) => {
          img class="background-image" src=(image.url) alt=(image.alt) loading="eager";
        }
        Background::Gradient => {
          div class="background-gradient" {}
        }
      }
      div class="background-overlay" {}
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use navapools_core::ImageRef;

  #[test]
  fn video_emits_mobile_source_first() {
    let markup = render(&Background::Video {
      desktop: "https://cdn.test/wide.mp4".to_string(),
      mobile: Some("https://cdn.test/tall.mp4".to_string()),
    })
    .into_string();
    let tall = markup.find("tall.mp4").expect("mobile source");
    let wide = markup.find("wide.mp4").expect("desktop source");
    assert!(tall < wide);
    assert!(markup.contains("max-width: 768px"));
  }

  #[test]
  fn image_background() {
    let markup = render(&Background::Image(ImageRef {
      url: "https://cdn.test/pool.jpg".to_string(),
      alt: "Pool at dusk".to_string(),
      width: 1600,
      height: 900,
    }))
    .into_string();
    assert!(markup.contains("src=\"https://cdn.test/pool.jpg\""));
    assert!(markup.contains("alt=\"Pool at dusk\""));
  }

  #[test]
  fn gradient_fallback() {
    let markup = render(&Background::Gradient).into_string();
    assert!(markup.contains("background-gradient"));
    assert!(markup.contains("background-overlay"));
  }
}

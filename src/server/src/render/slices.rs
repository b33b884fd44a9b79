/* src/server/src/render/slices.rs */

//! Slice renderers and the tag registry. The registry is data-driven so new
//! slice kinds are additive; an unrecognized tag renders nothing and never
//! aborts the rest of the sequence.

use maud::{Markup, html};
use serde_json::{Map, Value};

use navapools_core::normalize::Slice;
use navapools_core::{ImageRef, background, coerce_text, coerce_url, image_ref};

use super::background as bg_view;

type RenderFn = fn(&Slice) -> Markup;

/// Tag -> renderer. Lookup order is irrelevant; tags are unique.
const RENDERERS: &[(&str, RenderFn)] = &[
  ("hero_fullscreen", hero_fullscreen),
  ("trust_bar", trust_bar),
  ("benefits", benefits),
  ("solutions", solutions),
  ("process", process),
  ("testimonials", testimonials),
  ("call_to_action_full", call_to_action_full),
  ("plans", plans),
  ("reviews", reviews),
  ("rich_text", rich_text),
  ("paragraph", paragraph),
  ("image", image_slice),
  ("faq", faq),
  ("contact_alternate", contact_alternate),
];

/// Render one slice, or `None` for an unknown tag.
pub fn render_slice(slice: &Slice) -> Option<Markup> {
  RENDERERS
    .iter()
    .find(|(tag, _)| *tag == slice.slice_type)
    .map(|(_, renderer)| renderer(slice))
}

/// Render an ordered slice sequence, skipping unknown tags.
pub fn render_zone(slices: &[Slice]) -> Markup {
  html! {
    @for slice in slices {
      @if let Some(markup) = render_slice(slice) {
        (markup)
      }
    }
  }
}

// -- field helpers over the opaque bags --

fn text(bag: &Map<String, Value>, key: &str) -> String {
  bag.get(key).map(coerce_text).unwrap_or_default()
}

fn url(bag: &Map<String, Value>, key: &str) -> String {
  bag.get(key).map(coerce_url).unwrap_or_default()
}

fn image(bag: &Map<String, Value>, key: &str) -> Option<ImageRef> {
  bag.get(key).and_then(image_ref)
}

/// Group fields may sit in `primary` (newer custom types) or `items`.
fn group<'a>(slice: &'a Slice, key: &str) -> Vec<Map<String, Value>> {
  if let Some(Value::Array(entries)) = slice.primary.get(key) {
    return entries.iter().filter_map(|e| e.as_object().cloned()).collect();
  }
  slice.items.clone()
}

fn cta(label: &str, href: &str, class: &str) -> Markup {
  html! {
    @if !label.is_empty() && !href.is_empty() {
      a class=(class) href=(href) { (label) }
    }
  }
}

// -- renderers --

fn hero_fullscreen(slice: &Slice) -> Markup {
  let primary = &slice.primary;
  // Field names changed once in the custom type; accept both generations.
  let primary_label = first_non_empty(&[text(primary, "primary_cta_text"), text(primary, "primary_button_text")]);
  let primary_href = first_non_empty(&[url(primary, "primary_cta_link"), url(primary, "primary_button_link")]);
  let secondary_label = first_non_empty(&[text(primary, "secondary_cta_text"), text(primary, "secondary_button_text")]);
  let secondary_href = first_non_empty(&[url(primary, "secondary_cta_link"), url(primary, "secondary_button_link")]);
  let own = background::from_primary(primary);
  html! {
    section class="slice hero-fullscreen" {
      (bg_view::render(&background::resolve(own, None)))
      div class="hero-content" {
        h1 { (text(primary, "title")) }
        @let subtitle = text(primary, "subtitle");
        @if !subtitle.is_empty() { p class="hero-subtitle" { (subtitle) } }
        div class="hero-actions" {
          (cta(&primary_label, &primary_href, "button button-primary"))
          (cta(&secondary_label, &secondary_href, "button button-secondary"))
        }
      }
    }
  }
}

fn trust_bar(slice: &Slice) -> Markup {
  html! {
    section class="slice trust-bar" {
      ul {
        @for item in &slice.items {
          li {
            @if let Some(icon) = image(item, "icon") {
              img src=(icon.url) alt=(icon.alt) loading="lazy";
            }
            span { (text(item, "text")) }
          }
        }
      }
    }
  }
}

fn benefits(slice: &Slice) -> Markup {
  html! {
    section class="slice benefits" {
      div class="benefit-grid" {
        @for item in &slice.items {
          article class="benefit" {
            @if let Some(icon) = image(item, "icon") {
              img src=(icon.url) alt=(icon.alt) loading="lazy";
            }
            h3 { (text(item, "title")) }
            p { (text(item, "description")) }
          }
        }
      }
    }
  }
}

fn solutions(slice: &Slice) -> Markup {
  html! {
    section class="slice solutions" {
      @let title = text(&slice.primary, "title");
      @if !title.is_empty() { h3 { (title) } }
      @for (index, item) in slice.items.iter().enumerate() {
        @let class = if index % 2 == 1 { "solution solution-reversed" } else { "solution" };
        div class=(class) {
          @if let Some(img) = image(item, "image") {
            img src=(img.url) alt=(img.alt) loading="lazy";
          }
          div class="solution-body" {
            h4 { (text(item, "subtitle")) }
            p { (text(item, "text")) }
            (cta(&text(item, "cta_text"), &url(item, "cta_link"), "button button-primary"))
          }
        }
      }
    }
  }
}

fn process(slice: &Slice) -> Markup {
  html! {
    section class="slice process" {
      ol class="process-steps" {
        @for item in &slice.items {
          li {
            @if let Some(icon) = image(item, "icon") {
              img src=(icon.url) alt=(icon.alt) loading="lazy";
            }
            h3 { (text(item, "title")) }
            p { (text(item, "description")) }
          }
        }
      }
    }
  }
}

fn testimonials(slice: &Slice) -> Markup {
  html! {
    section class="slice testimonials" {
      @for item in &slice.items {
        blockquote {
          p { (text(item, "quote")) }
          footer {
            cite { (text(item, "author_name")) }
            @let location = text(item, "author_location");
            @if !location.is_empty() { span class="location" { (location) } }
          }
        }
      }
    }
  }
}

fn call_to_action_full(slice: &Slice) -> Markup {
  let primary = &slice.primary;
  html! {
    section class="slice cta-full" {
      h2 { (text(primary, "title")) }
      @let subtitle = text(primary, "subtitle");
      @if !subtitle.is_empty() { p { (subtitle) } }
      (cta(&text(primary, "cta_text"), &url(primary, "cta_link"), "button button-primary"))
      div class="cta-details" {
        @let phone = text(primary, "phone");
        @if !phone.is_empty() { a href={ "tel:" (phone) } { (phone) } }
        @let email = text(primary, "email");
        @if !email.is_empty() { a href={ "mailto:" (email) } { (email) } }
        @let area = text(primary, "service_area");
        @if !area.is_empty() { span { (area) } }
      }
    }
  }
}

fn plans(slice: &Slice) -> Markup {
  html! {
    section class="slice plans" {
      h2 { (text(&slice.primary, "section_title")) }
      @let subtitle = text(&slice.primary, "section_subtitle");
      @if !subtitle.is_empty() { p { (subtitle) } }
      div class="plan-grid" {
        @for plan in group(slice, "plans") {
          article class="plan" {
            h3 { (text(&plan, "name")) }
            p class="plan-price" { (text(&plan, "price")) }
            p { (text(&plan, "description")) }
            (cta(&text(&plan, "cta_text"), &url(&plan, "cta_link"), "button button-primary"))
          }
        }
      }
    }
  }
}

fn reviews(slice: &Slice) -> Markup {
  html! {
    section class="slice reviews" {
      h2 { (text(&slice.primary, "section_title")) }
      @let subtitle = text(&slice.primary, "section_subtitle");
      @if !subtitle.is_empty() { p { (subtitle) } }
      @if let Some(main) = image(&slice.primary, "main_image") {
        img src=(main.url) alt=(main.alt) loading="lazy";
      }
      div class="review-grid" {
        @for review in group(slice, "reviews") {
          blockquote {
            p { (text(&review, "quote")) }
            footer { cite { (text(&review, "author")) } }
          }
        }
      }
    }
  }
}

fn rich_text(slice: &Slice) -> Markup {
  rich_blocks(slice.primary.get("content"))
}

fn paragraph(slice: &Slice) -> Markup {
  html! {
    section class="slice paragraph" {
      p { (text(&slice.primary, "text")) }
    }
  }
}

fn image_slice(slice: &Slice) -> Markup {
  html! {
    @if let Some(img) = image(&slice.primary, "image") {
      figure class="slice image" {
        img src=(img.url) alt=(img.alt) width=(img.width) height=(img.height) loading="lazy";
        @if !img.alt.is_empty() { figcaption { (img.alt) } }
      }
    }
  }
}

fn faq(slice: &Slice) -> Markup {
  let section_title = {
    let t = text(&slice.primary, "section_title");
    if t.is_empty() { "Frequently Asked Questions".to_string() } else { t }
  };
  html! {
    section class="slice faq" {
      h2 { (section_title) }
      @for item in group(slice, "faqs") {
        details {
          summary { (text(&item, "question")) }
          p { (text(&item, "answer")) }
        }
      }
    }
  }
}

fn contact_alternate(slice: &Slice) -> Markup {
  let primary = &slice.primary;
  html! {
    section class="slice contact-alternate" {
      @if let Some(bg) = image(primary, "background_image") {
        img class="section-background" src=(bg.url) alt=(bg.alt) loading="lazy";
      }
      h2 { (text(primary, "title")) }
      p { (text(primary, "description")) }
      (cta(&text(primary, "button_text"), "#contact", "button button-primary"))
      ul class="social-links" {
        @for item in &slice.items {
          li {
            a href=(url(item, "social_link")) rel="noopener" {
              @if let Some(icon) = image(item, "social_icon") {
                img src=(icon.url) alt=(icon.alt) loading="lazy";
              }
              span { (text(item, "social_text")) }
            }
          }
        }
      }
    }
  }
}

/// Render a rich-text value: plain string becomes one paragraph, a block
/// list becomes headings/paragraphs by block type.
pub fn rich_blocks(value: Option<&Value>) -> Markup {
  match value {
    Some(Value::String(s)) => html! { p { (s) } },
    Some(Value::Array(blocks)) => html! {
      @for block in blocks {
        @let kind = block.get("type").and_then(Value::as_str).unwrap_or("paragraph");
        @let body = block.get("text").and_then(Value::as_str).unwrap_or_default();
        @match kind {
          "heading1" => { h1 { (body) } }
          "heading2" => { h2 { (body) } }
          "heading3" => { h3 { (body) } }
          _ => { p { (body) } }
        }
      }
    },
    _ => html! {},
  }
}

fn first_non_empty(candidates: &[String]) -> String {
  candidates.iter().find(|c| !c.is_empty()).cloned().unwrap_or_default()
}

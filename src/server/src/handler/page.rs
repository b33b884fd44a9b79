/* src/server/src/handler/page.rs */

//! Locale-prefixed page handlers. Content fetch failures degrade to safe
//! defaults; a document absent in every locale renders the not-found page.
//! Nothing here is allowed to surface a raw upstream error.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use maud::{Markup, html};
use tracing::warn;

use navapools_content::{get_contact_copy, get_navigation, get_page, get_settings};
use navapools_core::locale::DEFAULT_LOCALE;
use navapools_core::normalize::page_view;
use navapools_core::{Document, coerce_text, locale, metadata};

use super::AppState;
use crate::render::{layout, slices};

pub async fn handle_root() -> Redirect {
  Redirect::permanent(&format!("/{DEFAULT_LOCALE}"))
}

pub async fn handle_home(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
) -> (StatusCode, Html<String>) {
  render_page(&state, &locale, "home").await
}

pub async fn handle_page(
  State(state): State<Arc<AppState>>,
  Path((locale, uid)): Path<(String, String)>,
) -> (StatusCode, Html<String>) {
  render_page(&state, &locale, &uid).await
}

pub async fn handle_contact_page(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
) -> (StatusCode, Html<String>) {
  let locale = locale::resolve(Some(&locale));
  let copy = match get_contact_copy(&state.content, locale).await {
    Ok(copy) => copy,
    Err(err) => {
      warn!(%err, "contact copy fetch failed");
      None
    }
  };
  let meta = metadata::build(
    copy.as_ref(),
    "contact",
    locale,
    "contact",
    &state.config.site_url,
    &state.defaults,
  );
  let content = contact_form(locale, copy.as_ref());
  let html = wrap(&state, locale, &meta, content).await;
  (StatusCode::OK, Html(html))
}

async fn render_page(state: &AppState, locale: &str, uid: &str) -> (StatusCode, Html<String>) {
  let locale = locale::resolve(Some(locale));
  let doc = match get_page(&state.content, locale, uid).await {
    Ok(doc) => doc,
    Err(err) => {
      warn!(%err, uid, "page fetch failed");
      None
    }
  };
  let meta =
    metadata::build(doc.as_ref(), "page", locale, uid, &state.config.site_url, &state.defaults);

  match doc.as_ref().and_then(|d| page_view(d, "page")) {
    Some(view) => {
      let content = html! {
        @if !view.title.is_empty() { h1 class="page-title" { (view.title) } }
        (slices::render_zone(&view.slices))
      };
      (StatusCode::OK, Html(wrap(state, locale, &meta, content).await))
    }
    None => {
      let content = not_found(locale);
      (StatusCode::NOT_FOUND, Html(wrap(state, locale, &meta, content).await))
    }
  }
}

/// Fetch the shell's nav and settings (with their own fallbacks) and wrap
/// the page body in the document layout.
pub(super) async fn wrap(
  state: &AppState,
  locale: &str,
  meta: &metadata::PageMetadata,
  content: Markup,
) -> String {
  let (settings, navigation) = tokio::join!(
    get_settings(&state.content, locale),
    get_navigation(&state.content, locale),
  );
  let shell = layout::Shell {
    meta,
    locale,
    settings: &settings,
    navigation: &navigation,
    business: &state.config.business,
    origin: &state.config.site_url,
  };
  layout::page(&shell, content).into_string()
}

fn not_found(locale: &str) -> Markup {
  let (title, body, link) = if locale == "es" {
    ("Página no encontrada", "La página que buscas no existe o fue movida.", "Volver al inicio")
  } else {
    ("Page not found", "The page you are looking for does not exist or was moved.", "Back to home")
  };
  html! {
    section class="not-found" {
      h1 { (title) }
      p { (body) }
      a class="button button-primary" href={ "/" (locale) } { (link) }
    }
  }
}

fn contact_form(locale: &str, copy: Option<&Document>) -> Markup {
  let field = |key: &str, fallback: &str| {
    copy
      .and_then(|d| d.data.get(key))
      .map(coerce_text)
      .filter(|v| !v.is_empty())
      .unwrap_or_else(|| fallback.to_string())
  };
  let es = locale == "es";
  let title = field("title", if es { "Contacto" } else { "Contact" });
  let description = field("description", "");
  let name_placeholder = field("name_placeholder", if es { "Nombre" } else { "Name" });
  let email_placeholder = field("email_placeholder", "Email");
  let message_placeholder = field("message_placeholder", if es { "Mensaje" } else { "Message" });
  let submit_label = field("submit_label", if es { "Enviar" } else { "Send" });
  html! {
    section class="contact-page" id="contact" {
      h1 { (title) }
      @if !description.is_empty() { p { (description) } }
      form class="contact-form" method="post" action="/api/contact" data-locale=(locale) {
        input name="name" placeholder=(name_placeholder) required;
        input name="email" type="email" placeholder=(email_placeholder) required;
        textarea name="message" rows="6" placeholder=(message_placeholder) required {}
        button type="submit" { (submit_label) }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn not_found_localized() {
    assert!(not_found("es").into_string().contains("Página no encontrada"));
    assert!(not_found("en").into_string().contains("Page not found"));
  }

  #[test]
  fn contact_form_prefers_editorial_copy() {
    let doc: Document = serde_json::from_value(serde_json::json!({
      "id": "X", "type": "contact", "lang": "es-us",
      "data": { "title": "Hablemos", "submit_label": "Enviar mensaje" }
    }))
    .expect("document");
    let markup = contact_form("es", Some(&doc)).into_string();
    assert!(markup.contains("Hablemos"));
    assert!(markup.contains("Enviar mensaje"));
    // Missing fields fall back to the locale defaults.
    assert!(markup.contains("placeholder=\"Nombre\""));
  }

  #[test]
  fn contact_form_without_copy_uses_defaults() {
    let markup = contact_form("en", None).into_string();
    assert!(markup.contains("<h1>Contact</h1>"));
    assert!(markup.contains("action=\"/api/contact\""));
  }
}

/* src/content/src/client.rs */

//! Thin accessor over the content backend's REST API. Every query resolves
//! the repository's master ref first (cached briefly), then searches by
//! predicate scoped to the requested language tag.
//!
//! `Ok(None)` / an empty vec means the document is absent; transport and
//! non-2xx failures surface as `UPSTREAM_ERROR` for the caller's fallback
//! policy.

use std::future::Future;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::debug;

use navapools_core::{Document, SiteError};

/// How long a resolved master ref is reused before re-fetching.
const REF_TTL: Duration = Duration::from_secs(30);

/// Read operations against the document store. The query layer is generic
/// over this so the fallback protocol is testable without a live backend.
pub trait DocumentStore {
  fn get_singleton(
    &self,
    kind: &str,
    lang: &str,
  ) -> impl Future<Output = Result<Option<Document>, SiteError>> + Send;
  fn get_by_uid(
    &self,
    kind: &str,
    uid: &str,
    lang: &str,
  ) -> impl Future<Output = Result<Option<Document>, SiteError>> + Send;
  fn get_by_id(
    &self,
    id: &str,
    lang: &str,
  ) -> impl Future<Output = Result<Option<Document>, SiteError>> + Send;
  fn get_all(
    &self,
    kind: &str,
    lang: &str,
  ) -> impl Future<Output = Result<Vec<Document>, SiteError>> + Send;
}

const PAGE_SIZE: u32 = 100;

#[derive(Deserialize)]
struct Repository {
  refs: Vec<Ref>,
}

#[derive(Deserialize)]
struct Ref {
  #[serde(rename = "ref")]
  reference: String,
  #[serde(rename = "isMasterRef", default)]
  is_master: bool,
}

#[derive(Deserialize)]
struct SearchResponse {
  results: Vec<Document>,
  #[serde(default)]
  next_page: Option<String>,
}

pub struct ContentClient {
  http: reqwest::Client,
  api_url: String,
  master_ref: Mutex<Option<(String, Instant)>>,
}

impl ContentClient {
  pub fn new(api_url: impl Into<String>, http: reqwest::Client) -> Self {
    Self { http, api_url: api_url.into().trim_end_matches('/').to_string(), master_ref: Mutex::new(None) }
  }

  /// Fetch a singleton document of the given kind.
  pub async fn get_singleton(&self, kind: &str, lang: &str) -> Result<Option<Document>, SiteError> {
    let predicate = format!("[[at(document.type,\"{kind}\")]]");
    Ok(self.search_page(&predicate, lang, 1).await?.results.into_iter().next())
  }

  /// Fetch a document of the given kind by its human slug.
  pub async fn get_by_uid(
    &self,
    kind: &str,
    uid: &str,
    lang: &str,
  ) -> Result<Option<Document>, SiteError> {
    let predicate = format!("[[at(my.{kind}.uid,\"{uid}\")]]");
    Ok(self.search_page(&predicate, lang, 1).await?.results.into_iter().next())
  }

  /// Fetch a document by backend id (used to chase alternate-language links).
  pub async fn get_by_id(&self, id: &str, lang: &str) -> Result<Option<Document>, SiteError> {
    let predicate = format!("[[at(document.id,\"{id}\")]]");
    Ok(self.search_page(&predicate, lang, 1).await?.results.into_iter().next())
  }

  /// Fetch every document of the given kind, following pagination.
  pub async fn get_all(&self, kind: &str, lang: &str) -> Result<Vec<Document>, SiteError> {
    let predicate = format!("[[at(document.type,\"{kind}\")]]");
    let mut documents = Vec::new();
    let mut page = 1;
    loop {
      let response = self.search_page(&predicate, lang, page).await?;
      let more = response.next_page.is_some();
      documents.extend(response.results);
      if !more {
        return Ok(documents);
      }
      page += 1;
    }
  }

  async fn search_page(
    &self,
    predicate: &str,
    lang: &str,
    page: u32,
  ) -> Result<SearchResponse, SiteError> {
    let reference = self.master_ref().await?;
    let url = format!("{}/documents/search", self.api_url);
    debug!(predicate, lang, page, "content search");
    let response = self
      .http
      .get(&url)
      .query(&[
        ("ref", reference.as_str()),
        ("q", predicate),
        ("lang", lang),
        ("pageSize", &PAGE_SIZE.to_string()),
        ("page", &page.to_string()),
      ])
      .send()
      .await
      .map_err(|e| SiteError::upstream(format!("content backend unreachable: {e}")))?;
    if !response.status().is_success() {
      return Err(SiteError::upstream(format!(
        "content search returned {}",
        response.status()
      )));
    }
    response
      .json::<SearchResponse>()
      .await
      .map_err(|e| SiteError::upstream(format!("malformed content response: {e}")))
  }

  /// Current master ref, reusing a recently resolved one.
  async fn master_ref(&self) -> Result<String, SiteError> {
    let now = Instant::now();
    {
      let guard = match self.master_ref.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
      };
      if let Some((reference, fetched_at)) = guard.as_ref() {
        if now.duration_since(*fetched_at) < REF_TTL {
          return Ok(reference.clone());
        }
      }
    }

    let repository: Repository = self
      .http
      .get(&self.api_url)
      .send()
      .await
      .map_err(|e| SiteError::upstream(format!("content backend unreachable: {e}")))?
      .json()
      .await
      .map_err(|e| SiteError::upstream(format!("malformed repository response: {e}")))?;
    let reference = repository
      .refs
      .into_iter()
      .find(|r| r.is_master)
      .map(|r| r.reference)
      .ok_or_else(|| SiteError::upstream("repository has no master ref"))?;

    let mut guard = match self.master_ref.lock() {
      Ok(g) => g,
      Err(poisoned) => poisoned.into_inner(),
    };
    *guard = Some((reference.clone(), now));
    Ok(reference)
  }
}

impl DocumentStore for ContentClient {
  async fn get_singleton(&self, kind: &str, lang: &str) -> Result<Option<Document>, SiteError> {
    ContentClient::get_singleton(self, kind, lang).await
  }

  async fn get_by_uid(
    &self,
    kind: &str,
    uid: &str,
    lang: &str,
  ) -> Result<Option<Document>, SiteError> {
    ContentClient::get_by_uid(self, kind, uid, lang).await
  }

  async fn get_by_id(&self, id: &str, lang: &str) -> Result<Option<Document>, SiteError> {
    ContentClient::get_by_id(self, id, lang).await
  }

  async fn get_all(&self, kind: &str, lang: &str) -> Result<Vec<Document>, SiteError> {
    ContentClient::get_all(self, kind, lang).await
  }
}

//! Firestore REST record source.
//!
//! Lists every document in the configured collection, following
//! `nextPageToken` until the collection is exhausted. No server-side
//! filtering is requested.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{FetchOrder, RecordSource};
use crate::config::SourceConfig;
use crate::error::{InsightsError, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Value>,
    next_page_token: Option<String>,
}

/// Fetches the transaction collection over the Firestore REST API.
pub struct FirestoreSource {
    config: SourceConfig,
    client: Client,
}

impl FirestoreSource {
    /// Create a source for the given project settings.
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    fn fetch_page(
        &self,
        order: FetchOrder,
        page_token: Option<&str>,
    ) -> Result<ListDocumentsResponse> {
        let mut query: Vec<(&str, String)> = vec![("pageSize", self.config.page_size.to_string())];
        if order == FetchOrder::ByItemId {
            query.push(("orderBy", "itemId".to_string()));
        }
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        let resp = self
            .client
            .get(self.config.documents_url())
            .query(&query)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let details = resp.text().unwrap_or_default();
            tracing::error!("Firestore returned {}: {}", status, details);
            return Err(InsightsError::SourceUnavailable {
                status: status.as_u16(),
                details,
            });
        }

        Ok(resp.json()?)
    }
}

impl RecordSource for FirestoreSource {
    fn fetch(&self, order: FetchOrder) -> Result<Vec<Value>> {
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(order, page_token.as_deref())?;
            pages += 1;
            tracing::debug!(
                "fetched Firestore page {} with {} documents (more: {})",
                pages,
                page.documents.len(),
                page.next_page_token.is_some()
            );
            records.extend(page.documents);

            match page.next_page_token {
                Some(next) if !next.is_empty() && page_token.as_deref() != Some(next.as_str()) => {
                    page_token = Some(next);
                }
                _ => break,
            }
        }

        Ok(records)
    }
}

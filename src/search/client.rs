//! Primary search HTTP client
//!
//! Issues a single GET per search; there is no retry. Transport and parse
//! failures are surfaced to the alert sink here, at the boundary, so the
//! pipeline can end the run without alerting a second time.

use std::sync::Arc;

use super::{SearchError, adapter, dto};
use crate::alert::{AlertSink, Notification};
use crate::domain::SearchResult;

/// Fixed page size for every search request
pub const RESULT_LIMIT: u32 = 50;

/// Primary search API client
pub struct SearchClient {
    http_client: reqwest::Client,
    base_url: String,
    sink: Arc<dyn AlertSink>,
}

impl SearchClient {
    /// Create a new client against the production endpoint
    pub fn new(sink: Arc<dyn AlertSink>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://itunes.apple.com".to_string(),
            sink,
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>, sink: Arc<dyn AlertSink>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            sink,
        }
    }

    /// The full request URL for a term and media type.
    ///
    /// Also used as the request description in alerts (the insufficient
    /// results notification cites it).
    pub fn request_url(&self, term: &str, media: &str) -> String {
        format!(
            "{}/search?term={}&limit={}&media={}",
            self.base_url,
            urlencoding::encode(term),
            RESULT_LIMIT,
            urlencoding::encode(media)
        )
    }

    /// Search for tracks matching a free-text term.
    ///
    /// On failure the sink has already been notified; the caller only needs
    /// to end its run.
    pub async fn search(
        &self,
        term: &str,
        media: &str,
    ) -> Result<Vec<SearchResult>, SearchError> {
        match self.send_search_request(term, media).await {
            Ok(envelope) => Ok(adapter::to_results(envelope)),
            Err(e) => {
                self.sink.alert(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    async fn send_search_request(
        &self,
        term: &str,
        media: &str,
    ) -> Result<dto::SearchEnvelope, SearchError> {
        let url = self.request_url(term, media);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::SearchEnvelope>()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))
    }
}

//! Secondary enrichment HTTP client
//!
//! One client serves both the track-search (rating) endpoint and the lyrics
//! matcher endpoint. Failure policy differs from the primary search client:
//! a failed rating lookup degrades to "absent" and a failed lyrics lookup
//! degrades to a sentinel string, so a single bad track never aborts the
//! batch. The alert sink is only notified for transport errors; "no match"
//! is expected data.
//!
//! The API key is resolved from the key provider once per client. A missing
//! key is reported once and the client proceeds with an empty key - the
//! request goes out and the API answers with an auth error, which then takes
//! the ordinary absent/sentinel path.

use std::sync::{Arc, OnceLock};

use super::{adapter, dto};
use crate::alert::{AlertSink, Notification};
use crate::domain::RatingRecord;
use crate::traits::ApiKeyProvider;

/// Sentinel returned whenever lyrics cannot be fetched
pub const NOT_AVAILABLE: &str = "Not Available";

/// Secondary enrichment API client
pub struct RatingsClient {
    http_client: reqwest::Client,
    base_url: String,
    keys: Arc<dyn ApiKeyProvider>,
    resolved_key: OnceLock<String>,
    sink: Arc<dyn AlertSink>,
}

impl RatingsClient {
    /// Create a new client against the production endpoint
    pub fn new(keys: Arc<dyn ApiKeyProvider>, sink: Arc<dyn AlertSink>) -> Self {
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
            base_url: "https://api.musixmatch.com/ws/1.1".to_string(),
            keys,
            resolved_key: OnceLock::new(),
            sink,
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(
        base_url: impl Into<String>,
        keys: Arc<dyn ApiKeyProvider>,
        sink: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            keys,
            resolved_key: OnceLock::new(),
            sink,
        }
    }

    /// Resolve the API key, alerting the sink at most once on failure.
    fn api_key(&self) -> &str {
        self.resolved_key.get_or_init(|| match self.keys.api_key() {
            Ok(key) => key,
            Err(e) => {
                self.sink.alert(Notification::error(e.to_string()));
                String::new()
            }
        })
    }

    /// Fetch the best-match rating for a track, sorted by rating descending
    /// with page size 1.
    ///
    /// Transport failure, a JSON-shape mismatch, and an empty match list all
    /// yield `None`.
    pub async fn fetch_rating(
        &self,
        track_name: &str,
        artist_name: &str,
    ) -> Option<RatingRecord> {
        let url = format!(
            "{}/track.search?q_track={}&q_artist={}&s_track_rating=desc&page_size=1&page=1&apikey={}",
            self.base_url,
            urlencoding::encode(track_name),
            urlencoding::encode(artist_name),
            urlencoding::encode(self.api_key())
        );

        let response = match self.http_client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                self.sink.alert(Notification::error(e.to_string()));
                return None;
            }
        };

        match response.json::<dto::TrackSearchResponse>().await {
            Ok(parsed) => adapter::to_rating(parsed),
            Err(e) => {
                tracing::debug!("unusable rating response for {track_name}: {e}");
                None
            }
        }
    }

    /// Fetch lyrics for a track/artist pair.
    ///
    /// Returns the lyrics body for a 200 status; the [`NOT_AVAILABLE`]
    /// sentinel for any other status, transport error, or parse failure.
    /// Never errors past this boundary.
    pub async fn fetch_lyrics(&self, track_name: &str, artist_name: &str) -> String {
        let url = format!(
            "{}/matcher.lyrics.get?q_track={}&q_artist={}&apikey={}",
            self.base_url,
            urlencoding::encode(track_name),
            urlencoding::encode(artist_name),
            urlencoding::encode(self.api_key())
        );

        let response = match self.http_client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                self.sink.alert(Notification::error(e.to_string()));
                return NOT_AVAILABLE.to_string();
            }
        };

        match response.json::<dto::LyricsResponse>().await {
            Ok(parsed) => {
                adapter::to_lyrics(parsed).unwrap_or_else(|| NOT_AVAILABLE.to_string())
            }
            Err(e) => {
                tracing::debug!("unusable lyrics response for {track_name}: {e}");
                NOT_AVAILABLE.to_string()
            }
        }
    }
}

//! Trait definitions for external API clients and the key provider.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.

use async_trait::async_trait;

use crate::domain::{RatingRecord, SearchResult};
use crate::search::SearchError;

/// Trait for the primary free-text track search.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// The full request URL a search would issue; used as the request
    /// description in failure notifications.
    fn request_url(&self, term: &str, media: &str) -> String;

    /// Search for tracks matching a term. On failure the implementation has
    /// already notified the alert sink.
    async fn search(
        &self,
        term: &str,
        media: &str,
    ) -> Result<Vec<SearchResult>, SearchError>;
}

/// Trait for the secondary rating and lyrics lookups.
#[async_trait]
pub trait RatingsApi: Send + Sync {
    /// Best-match rating for a track, or `None` when there is no usable
    /// match.
    async fn fetch_rating(
        &self,
        track_name: &str,
        artist_name: &str,
    ) -> Option<RatingRecord>;

    /// Lyrics text, or the "Not Available" sentinel. Never fails.
    async fn fetch_lyrics(&self, track_name: &str, artist_name: &str) -> String;
}

/// Errors from the key provider.
///
/// Recoverable by design: enrichment proceeds with an empty key rather than
/// being skipped.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KeyError {
    #[error("API key not configured: {0}")]
    Missing(String),

    #[error("Failed to read credentials: {0}")]
    Unreadable(String),
}

/// Trait for obtaining the secondary API key.
pub trait ApiKeyProvider: Send + Sync {
    fn api_key(&self) -> Result<String, KeyError>;
}

/// Key provider wrapping a key that is already in hand (CLI flag, env var).
pub struct StaticKey {
    key: String,
}

impl StaticKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ApiKeyProvider for StaticKey {
    fn api_key(&self) -> Result<String, KeyError> {
        Ok(self.key.clone())
    }
}

// Implement traits for real clients

#[async_trait]
impl SearchApi for crate::search::SearchClient {
    fn request_url(&self, term: &str, media: &str) -> String {
        self.request_url(term, media)
    }

    async fn search(
        &self,
        term: &str,
        media: &str,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.search(term, media).await
    }
}

#[async_trait]
impl RatingsApi for crate::ratings::RatingsClient {
    async fn fetch_rating(
        &self,
        track_name: &str,
        artist_name: &str,
    ) -> Option<RatingRecord> {
        self.fetch_rating(track_name, artist_name).await
    }

    async fn fetch_lyrics(&self, track_name: &str, artist_name: &str) -> String {
        self.fetch_lyrics(track_name, artist_name).await
    }
}

/// Mock clients for testing.
///
/// Return configurable responses and count their calls, so tests can assert
/// how many network fetches a flow would have issued.
#[cfg(test)]
pub mod mocks {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    /// Mock search client that returns predefined results.
    pub struct MockSearch {
        /// Results to return from search
        pub results: Vec<SearchResult>,
        /// Error to return (takes precedence over results)
        pub error: Option<SearchError>,
    }

    impl MockSearch {
        /// Create a mock returning the given results.
        pub fn with_results(results: Vec<SearchResult>) -> Self {
            Self {
                results,
                error: None,
            }
        }

        /// Create a mock that fails every search.
        pub fn with_error(error: SearchError) -> Self {
            Self {
                results: vec![],
                error: Some(error),
            }
        }
    }

    #[async_trait]
    impl SearchApi for MockSearch {
        fn request_url(&self, term: &str, media: &str) -> String {
            format!("mock://search?term={term}&media={media}")
        }

        async fn search(
            &self,
            _term: &str,
            _media: &str,
        ) -> Result<Vec<SearchResult>, SearchError> {
            if let Some(ref error) = self.error {
                return Err(error.clone());
            }
            Ok(self.results.clone())
        }
    }

    /// Mock ratings client with per-track ratings and call counters.
    pub struct MockRatings {
        ratings: HashMap<String, RatingRecord>,
        lyrics: String,
        delay: Option<Duration>,
        rating_calls: AtomicUsize,
        lyrics_calls: AtomicUsize,
    }

    impl MockRatings {
        /// Create a mock that matches none of the tracks.
        pub fn no_matches() -> Self {
            Self {
                ratings: HashMap::new(),
                lyrics: "mock lyrics".to_string(),
                delay: None,
                rating_calls: AtomicUsize::new(0),
                lyrics_calls: AtomicUsize::new(0),
            }
        }

        /// Create a mock returning the given records, keyed by track name.
        pub fn with_ratings(records: Vec<RatingRecord>) -> Self {
            let mut mock = Self::no_matches();
            mock.ratings = records
                .into_iter()
                .map(|record| (record.track_name.clone(), record))
                .collect();
            mock
        }

        /// Replace the lyrics text every lookup returns.
        pub fn with_lyrics(mut self, text: impl Into<String>) -> Self {
            self.lyrics = text.into();
            self
        }

        /// Add an await point to every rating lookup, so tests can interleave
        /// cancellation with a run in flight.
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn rating_calls(&self) -> usize {
            self.rating_calls.load(Ordering::SeqCst)
        }

        pub fn lyrics_calls(&self) -> usize {
            self.lyrics_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RatingsApi for MockRatings {
        async fn fetch_rating(
            &self,
            track_name: &str,
            _artist_name: &str,
        ) -> Option<RatingRecord> {
            self.rating_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.ratings.get(track_name).cloned()
        }

        async fn fetch_lyrics(&self, _track_name: &str, _artist_name: &str) -> String {
            self.lyrics_calls.fetch_add(1, Ordering::SeqCst);
            self.lyrics.clone()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::test_utils::{rating_record, search_result};

        #[tokio::test]
        async fn test_mock_search_returns_results() {
            let mock = MockSearch::with_results(vec![search_result("One", "A")]);
            let results = mock.search("one", "music").await.unwrap();
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].track_name, "One");
        }

        #[tokio::test]
        async fn test_mock_search_error() {
            let mock = MockSearch::with_error(SearchError::Network("timeout".to_string()));
            let result = mock.search("one", "music").await;
            assert!(matches!(result, Err(SearchError::Network(_))));
        }

        #[tokio::test]
        async fn test_mock_ratings_counts_calls() {
            let mock = MockRatings::with_ratings(vec![rating_record("One", "A", 80)]);

            assert_eq!(mock.fetch_rating("One", "A").await.unwrap().track_rating, 80);
            assert!(mock.fetch_rating("Unknown", "A").await.is_none());
            assert_eq!(mock.rating_calls(), 2);

            assert_eq!(mock.fetch_lyrics("One", "A").await, "mock lyrics");
            assert_eq!(mock.lyrics_calls(), 1);
        }
    }
}

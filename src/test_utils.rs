//! Test utilities and fixtures for tunescout tests.
//!
//! Common factories to reduce boilerplate in tests.

use crate::domain::{RatingRecord, SearchResult};

/// Creates a SearchResult with sensible defaults.
pub fn search_result(track_name: &str, artist_name: &str) -> SearchResult {
    SearchResult {
        wrapper_type: Some("track".to_string()),
        kind: Some("song".to_string()),
        artwork_url: Some(format!("https://example.com/{track_name}.jpg")),
        artist_name: artist_name.to_string(),
        track_name: track_name.to_string(),
        country: Some("USA".to_string()),
        currency: Some("USD".to_string()),
        release_date: Some("2020-10-01T07:00:00Z".to_string()),
    }
}

/// Creates a RatingRecord with sensible defaults.
pub fn rating_record(track_name: &str, artist_name: &str, rating: i64) -> RatingRecord {
    RatingRecord {
        track_id: 1,
        track_name: track_name.to_string(),
        track_rating: rating,
        commontrack_id: 2,
        artist_id: 3,
        artist_name: artist_name.to_string(),
    }
}

/// A batch of distinct search results, track names `track-1..=track-n`.
pub fn distinct_results(n: usize) -> Vec<SearchResult> {
    (1..=n)
        .map(|i| search_result(&format!("track-{i}"), "Dua Lipa"))
        .collect()
}

//! Internal domain models for track search and enrichment.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

use std::sync::Arc;

use tokio::sync::OnceCell;

/// A single track returned by the primary search API.
///
/// One instance per raw API entry; duplicate `track_name` values may occur
/// across instances until the list has been through [`crate::search::dedupe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub wrapper_type: Option<String>,
    pub kind: Option<String>,
    /// 100x100 artwork thumbnail URL
    pub artwork_url: Option<String>,
    pub artist_name: String,
    pub track_name: String,
    pub country: Option<String>,
    pub currency: Option<String>,
    /// ISO-8601 timestamp string as delivered by the API
    pub release_date: Option<String>,
}

impl SearchResult {
    /// Release date rendered as `dd Mon yyyy` (e.g. `19 Mar 2021`).
    ///
    /// Returns `None` when the date is missing or not a valid RFC 3339
    /// timestamp.
    pub fn release_date_display(&self) -> Option<String> {
        let raw = self.release_date.as_deref()?;
        let parsed = chrono::DateTime::parse_from_rfc3339(raw).ok()?;
        Some(parsed.format("%d %b %Y").to_string())
    }
}

/// Popularity rating for a track, matched by the secondary API.
///
/// Matched by `(track_name, artist_name)` lookup, not identity - the
/// secondary API's fuzzy match may resolve to a different underlying track
/// than the search result it was looked up for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingRecord {
    pub track_id: i64,
    pub track_name: String,
    /// 0-100
    pub track_rating: i64,
    pub commontrack_id: i64,
    pub artist_id: i64,
    pub artist_name: String,
}

/// A search result paired with its (optional) rating and a lazily fetched
/// lyrics text.
///
/// The lyrics cell is filled at most once and cached for the lifetime of the
/// track; clones share the cache, so a fetch through any clone is visible to
/// all of them.
#[derive(Debug, Clone)]
pub struct EnrichedTrack {
    pub result: SearchResult,
    pub rating: Option<RatingRecord>,
    lyrics: Arc<OnceCell<String>>,
}

impl EnrichedTrack {
    pub fn new(result: SearchResult, rating: Option<RatingRecord>) -> Self {
        Self {
            result,
            rating,
            lyrics: Arc::new(OnceCell::new()),
        }
    }

    /// Whether the lyrics action is available for this track.
    ///
    /// No rating means no lyrics: the lyrics lookup needs the matched track
    /// and artist names from the rating record.
    pub fn lyrics_available(&self) -> bool {
        self.rating.is_some()
    }

    /// Lyrics text if a fetch has already completed.
    pub fn cached_lyrics(&self) -> Option<&str> {
        self.lyrics.get().map(String::as_str)
    }

    /// Shared lyrics cell, filled by the pipeline's lyrics fetch.
    pub(crate) fn lyrics_cell(&self) -> &OnceCell<String> {
        &self.lyrics
    }

    /// Rating rendered for display: `<rating>/100`, or `N/A` when absent.
    pub fn rating_display(&self) -> String {
        match &self.rating {
            Some(r) => format!("{}/100", r.track_rating),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_date(date: Option<&str>) -> SearchResult {
        SearchResult {
            wrapper_type: Some("track".to_string()),
            kind: Some("song".to_string()),
            artwork_url: None,
            artist_name: "Dua Lipa".to_string(),
            track_name: "Levitating".to_string(),
            country: Some("USA".to_string()),
            currency: Some("USD".to_string()),
            release_date: date.map(String::from),
        }
    }

    #[test]
    fn test_release_date_display() {
        let result = result_with_date(Some("2020-10-01T07:00:00Z"));
        assert_eq!(result.release_date_display().as_deref(), Some("01 Oct 2020"));
    }

    #[test]
    fn test_release_date_display_invalid() {
        assert!(result_with_date(Some("not-a-date")).release_date_display().is_none());
        assert!(result_with_date(None).release_date_display().is_none());
    }

    #[test]
    fn test_lyrics_unavailable_without_rating() {
        let track = EnrichedTrack::new(result_with_date(None), None);
        assert!(!track.lyrics_available());
        assert!(track.cached_lyrics().is_none());
        assert_eq!(track.rating_display(), "N/A");
    }

    #[test]
    fn test_clones_share_lyrics_cache() {
        let rating = RatingRecord {
            track_id: 1,
            track_name: "Levitating".to_string(),
            track_rating: 92,
            commontrack_id: 2,
            artist_id: 3,
            artist_name: "Dua Lipa".to_string(),
        };
        let track = EnrichedTrack::new(result_with_date(None), Some(rating));
        let clone = track.clone();

        track
            .lyrics_cell()
            .set("la la la".to_string())
            .expect("cell should be empty");

        assert_eq!(clone.cached_lyrics(), Some("la la la"));
        assert_eq!(track.rating_display(), "92/100");
    }
}

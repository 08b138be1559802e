//! Primary search API Data Transfer Objects
//!
//! These types match EXACTLY what the search API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the search module - convert to domain types.
//!
//! Example response:
//! ```json
//! {
//!   "resultCount": 2,
//!   "results": [{
//!     "wrapperType": "track",
//!     "kind": "song",
//!     "artworkUrl100": "https://...",
//!     "artistName": "Dua Lipa",
//!     "trackName": "Levitating",
//!     "country": "USA",
//!     "currency": "USD",
//!     "releaseDate": "2020-10-01T07:00:00Z"
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level search response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEnvelope {
    #[serde(default)]
    pub result_count: i64,
    /// Missing or empty array means "no results", not a failure
    #[serde(default)]
    pub results: Vec<SearchResultDto>,
}

/// A single raw result entry
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultDto {
    pub wrapper_type: Option<String>,
    pub kind: Option<String>,
    pub artwork_url100: Option<String>,
    pub artist_name: Option<String>,
    pub track_name: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub release_date: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

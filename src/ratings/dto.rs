//! Secondary enrichment API Data Transfer Objects
//!
//! These types match EXACTLY what the secondary API returns.
//! DO NOT use these types outside the ratings module - convert to domain
//! types via the adapter.
//!
//! Example track-search response:
//! ```json
//! {
//!   "message": {
//!     "header": {"status_code": 200, "execute_time": 0.01, "available": 1},
//!     "body": {
//!       "track_list": [{
//!         "track": {
//!           "track_id": 1, "track_name": "Levitating", "track_rating": 92,
//!           "commontrack_id": 2, "artist_id": 3, "artist_name": "Dua Lipa"
//!         }
//!       }]
//!     }
//!   }
//! }
//! ```
//!
//! On non-200 statuses the API sends `"body": []` (an array, not an object),
//! so both body fields parse leniently: a shape mismatch becomes `None`
//! instead of failing the whole envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level track-search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackSearchResponse {
    pub message: TrackMessage,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackMessage {
    pub header: MessageHeader,
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<TrackBody>,
}

/// Status header shared by every secondary API envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageHeader {
    pub status_code: i64,
    pub execute_time: Option<f64>,
    pub available: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackBody {
    #[serde(default)]
    pub track_list: Vec<TrackItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackItem {
    pub track: TrackDto,
}

/// The matched track record
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackDto {
    pub track_id: i64,
    pub track_name: String,
    pub track_rating: i64,
    pub commontrack_id: i64,
    pub artist_id: i64,
    pub artist_name: String,
}

/// Top-level lyrics response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LyricsResponse {
    pub message: LyricsMessage,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LyricsMessage {
    pub header: MessageHeader,
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<LyricsBody>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LyricsBody {
    pub lyrics: Option<Lyrics>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Lyrics {
    pub lyrics_body: String,
}

/// Deserialize to `None` on any shape mismatch instead of erroring
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_track_search_with_match() {
        let json = r#"{
            "message": {
                "header": {"status_code": 200, "execute_time": 0.014, "available": 812},
                "body": {
                    "track_list": [{
                        "track": {
                            "track_id": 212476202,
                            "track_name": "Levitating",
                            "track_rating": 92,
                            "commontrack_id": 115367118,
                            "artist_id": 24450554,
                            "artist_name": "Dua Lipa"
                        }
                    }]
                }
            }
        }"#;

        let response: TrackSearchResponse =
            serde_json::from_str(json).expect("Should parse track-search response");

        assert_eq!(response.message.header.status_code, 200);
        let body = response.message.body.expect("body present");
        assert_eq!(body.track_list.len(), 1);
        let track = &body.track_list[0].track;
        assert_eq!(track.track_name, "Levitating");
        assert_eq!(track.track_rating, 92);
        assert_eq!(track.artist_name, "Dua Lipa");
    }

    #[test]
    fn test_parse_track_search_empty_list() {
        let json = r#"{
            "message": {
                "header": {"status_code": 200, "execute_time": 0.01, "available": 0},
                "body": {"track_list": []}
            }
        }"#;

        let response: TrackSearchResponse =
            serde_json::from_str(json).expect("Should parse empty track list");

        assert!(response.message.body.expect("body present").track_list.is_empty());
    }

    /// Error envelopes carry `"body": []` - the lenient body must not fail
    #[test]
    fn test_parse_error_envelope_with_array_body() {
        let json = r#"{
            "message": {
                "header": {"status_code": 401},
                "body": []
            }
        }"#;

        let response: TrackSearchResponse =
            serde_json::from_str(json).expect("Should parse error envelope");

        assert_eq!(response.message.header.status_code, 401);
        assert!(response.message.body.is_none());
    }

    #[test]
    fn test_parse_lyrics_response() {
        let json = r#"{
            "message": {
                "header": {"status_code": 200},
                "body": {"lyrics": {"lyrics_body": "If you wanna run away with me..."}}
            }
        }"#;

        let response: LyricsResponse =
            serde_json::from_str(json).expect("Should parse lyrics response");

        let lyrics = response
            .message
            .body
            .and_then(|b| b.lyrics)
            .expect("lyrics present");
        assert!(lyrics.lyrics_body.starts_with("If you wanna"));
    }

    #[test]
    fn test_parse_lyrics_not_found() {
        let json = r#"{
            "message": {
                "header": {"status_code": 404},
                "body": []
            }
        }"#;

        let response: LyricsResponse =
            serde_json::from_str(json).expect("Should parse 404 lyrics envelope");

        assert_eq!(response.message.header.status_code, 404);
        assert!(response.message.body.is_none());
    }
}

//! Adapter layer: Convert secondary enrichment DTOs to domain models
//!
//! This is the ONLY place where ratings DTO types are converted to domain
//! types. If the secondary API changes its response format, only this file
//! and dto.rs need to change.

use super::dto;
use crate::domain::RatingRecord;

/// Extract the best-match rating record from a track-search response.
///
/// Returns `None` for a missing body or an empty match list - absent data,
/// not an error.
pub fn to_rating(response: dto::TrackSearchResponse) -> Option<RatingRecord> {
    let body = response.message.body?;
    let item = body.track_list.into_iter().next()?;
    Some(RatingRecord {
        track_id: item.track.track_id,
        track_name: item.track.track_name,
        track_rating: item.track.track_rating,
        commontrack_id: item.track.commontrack_id,
        artist_id: item.track.artist_id,
        artist_name: item.track.artist_name,
    })
}

/// Extract the lyrics body from a lyrics response.
///
/// Only a 200 status carries usable lyrics; anything else is `None` and the
/// caller substitutes the sentinel.
pub fn to_lyrics(response: dto::LyricsResponse) -> Option<String> {
    if response.message.header.status_code != 200 {
        return None;
    }
    Some(response.message.body?.lyrics?.lyrics_body)
}

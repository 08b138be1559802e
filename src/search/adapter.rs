//! Adapter layer: Convert primary search DTOs to domain models
//!
//! This is the ONLY place where search DTO types are converted to domain
//! types. If the search API changes its response format, only this file and
//! dto.rs need to change.

use super::dto;
use crate::domain::SearchResult;

/// Convert a parsed search envelope to domain results.
///
/// Entries without a track name are skipped: the search API interleaves
/// non-track entries (artists, collections) that cannot be deduplicated or
/// enriched by name.
pub fn to_results(envelope: dto::SearchEnvelope) -> Vec<SearchResult> {
    envelope
        .results
        .into_iter()
        .filter_map(to_result)
        .collect()
}

fn to_result(dto: dto::SearchResultDto) -> Option<SearchResult> {
    let track_name = dto.track_name?;
    Some(SearchResult {
        wrapper_type: dto.wrapper_type,
        kind: dto.kind,
        artwork_url: dto.artwork_url100,
        artist_name: dto.artist_name.unwrap_or_default(),
        track_name,
        country: dto.country,
        currency: dto.currency,
        release_date: dto.release_date,
    })
}

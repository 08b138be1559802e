//! Deduplication of raw search results by track name.

use std::collections::HashSet;

use crate::domain::SearchResult;

/// Reduce a raw result list to one entry per distinct track name.
///
/// First occurrence wins; output order equals first-occurrence order of the
/// input. Pure function, deterministic given input order.
pub fn dedupe(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::with_capacity(results.len());
    results
        .into_iter()
        .filter(|result| seen.insert(result.track_name.clone()))
        .collect()
}

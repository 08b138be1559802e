//! Primary search API integration - free-text track lookup.
//!
//! The search service returns media metadata for a term, limited to a fixed
//! page size. Responses are parsed into wire DTOs (`dto.rs`), converted to
//! domain [`crate::domain::SearchResult`] values (`adapter.rs`), and reduced
//! to one entry per distinct track name (`dedupe.rs`).

pub mod dto;
mod adapter;
mod client;
mod dedupe;

pub use adapter::to_results;
pub use client::{RESULT_LIMIT, SearchClient};
pub use dedupe::dedupe;

/// Errors from the primary search client.
///
/// Both variants abort the current pipeline run; there is no retry.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

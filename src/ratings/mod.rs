//! Secondary enrichment API integration - ratings and lyrics.
//!
//! The secondary service matches tracks by `(track name, artist name)` and
//! returns a popularity rating; a separate matcher endpoint returns lyrics.
//! A missing match is expected data, not a failure: rating lookups yield
//! `None` and lyrics lookups yield a fixed sentinel, so one unmatched track
//! never aborts a whole enrichment batch.

pub mod dto;
mod adapter;
mod client;

pub use adapter::{to_lyrics, to_rating};
pub use client::{NOT_AVAILABLE, RatingsClient};

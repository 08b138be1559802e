//! Aggregation pipeline - orchestrates search, dedupe, guard, and enrichment.
//!
//! # Architecture
//!
//! One run is one end-to-end execution of search → dedupe → guard → enrich
//! for a single submitted term, executed on its own spawned worker task:
//!
//! 1. Query the primary search client
//! 2. Reduce the raw results to one entry per distinct track name
//! 3. Guard on a minimum distinct-result count
//! 4. Fetch a rating for each surviving track, strictly in sequence,
//!    emitting one progress event per track
//!
//! The worker owns the accumulating track list and hands it off by value in
//! a single `Completed` event, so no container is ever mutated from two
//! execution contexts. Cancellation is cooperative: a flag checked between
//! enrichment iterations; an already-issued HTTP call is not aborted, but a
//! cancelled run discards its partial results.
//!
//! Lyrics are never fetched during enrichment. [`Pipeline::fetch_lyrics_for`]
//! is a separate, consumer-triggered operation available once a run has
//! completed, cached per track after the first fetch.

mod run;
mod service;

pub use run::{CancelReason, MIN_DISTINCT_TRACKS, RunEvent, RunHandle, RunState};
pub use service::{DEFAULT_MEDIA, DEFAULT_TERM, LyricsUnavailable, Pipeline};

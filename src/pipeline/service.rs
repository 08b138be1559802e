//! Pipeline service - starts runs and serves the on-demand lyrics fetch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;

use crate::alert::{AlertSink, Notification};
use crate::domain::EnrichedTrack;
use crate::search::dedupe;
use crate::traits::{RatingsApi, SearchApi};

use super::run::{CancelReason, MIN_DISTINCT_TRACKS, RunEvent, RunHandle, RunState};

/// Search term used when the consumer doesn't supply one
pub const DEFAULT_TERM: &str = "dua lipa";

/// Media type used when the consumer doesn't supply one
pub const DEFAULT_MEDIA: &str = "music";

/// Lyrics were requested for a track without a matched rating.
///
/// The lyrics lookup needs the matched names from the rating record, so the
/// operation is not offered for unrated tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("lyrics are not available for a track without a rating")]
pub struct LyricsUnavailable;

/// Orchestrates pipeline runs over the search and ratings clients.
///
/// Cheap to clone-by-`Arc`-field; each [`Pipeline::start_search`] call
/// spawns an independent worker and returns a fresh handle, so starting a
/// new search supersedes a prior run without touching it.
pub struct Pipeline {
    search: Arc<dyn SearchApi>,
    ratings: Arc<dyn RatingsApi>,
    sink: Arc<dyn AlertSink>,
}

impl Pipeline {
    pub fn new(
        search: Arc<dyn SearchApi>,
        ratings: Arc<dyn RatingsApi>,
        sink: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            search,
            ratings,
            sink,
        }
    }

    /// Start a run for a term with the default media type.
    pub fn start_search(&self, term: &str) -> RunHandle {
        self.start_search_media(term, DEFAULT_MEDIA)
    }

    /// Start a run for a term and media type.
    ///
    /// Must be called from within a tokio runtime; the run executes on its
    /// own spawned task and never blocks the caller.
    pub fn start_search_media(&self, term: &str, media: &str) -> RunHandle {
        let (events, receiver) = mpsc::unbounded_channel();
        let cancel = Arc::new(AtomicBool::new(false));

        let worker = Worker {
            search: Arc::clone(&self.search),
            ratings: Arc::clone(&self.ratings),
            sink: Arc::clone(&self.sink),
            term: term.to_string(),
            media: media.to_string(),
            cancel: Arc::clone(&cancel),
            events,
        };
        tokio::spawn(worker.run());

        RunHandle::new(receiver, cancel)
    }

    /// Fetch lyrics for an enriched track, on demand.
    ///
    /// Idempotent: the first call fetches and caches, repeated calls return
    /// the cached text without another network fetch. The lookup uses the
    /// rating record's track and artist names, not the search result's; a
    /// track without a rating yields [`LyricsUnavailable`].
    pub async fn fetch_lyrics_for(
        &self,
        track: &EnrichedTrack,
    ) -> Result<String, LyricsUnavailable> {
        let Some(rating) = &track.rating else {
            return Err(LyricsUnavailable);
        };

        let text = track
            .lyrics_cell()
            .get_or_init(|| async {
                self.ratings
                    .fetch_lyrics(&rating.track_name, &rating.artist_name)
                    .await
            })
            .await;
        Ok(text.clone())
    }
}

/// One run's worth of state, owned by the spawned worker task.
struct Worker {
    search: Arc<dyn SearchApi>,
    ratings: Arc<dyn RatingsApi>,
    sink: Arc<dyn AlertSink>,
    term: String,
    media: String,
    cancel: Arc<AtomicBool>,
    events: mpsc::UnboundedSender<RunEvent>,
}

impl Worker {
    async fn run(self) {
        let mut state = RunState::Idle;

        self.advance(&mut state, RunState::Searching);
        let results = match self.search.search(&self.term, &self.media).await {
            Ok(results) => results,
            Err(e) => {
                // the client already alerted the sink at the boundary
                self.advance(&mut state, RunState::Failed);
                let _ = self.events.send(RunEvent::Failed(e.to_string()));
                return;
            }
        };

        self.advance(&mut state, RunState::Deduping);
        let deduped = dedupe(results);

        self.advance(&mut state, RunState::Guarding);
        if self.cancelled() {
            self.finish_cancelled(&mut state, CancelReason::Requested);
            return;
        }
        if deduped.len() < MIN_DISTINCT_TRACKS {
            let request = self.search.request_url(&self.term, &self.media);
            self.sink.alert(Notification::error(format!(
                "URL: {request}\nException: {} distinct results found, but {MIN_DISTINCT_TRACKS} or more are needed.",
                deduped.len()
            )));
            self.finish_cancelled(
                &mut state,
                CancelReason::InsufficientResults {
                    request,
                    count: deduped.len(),
                },
            );
            return;
        }

        self.advance(&mut state, RunState::Enriching);
        let total = deduped.len();
        let mut enriched = Vec::with_capacity(total);
        for (index, result) in deduped.into_iter().enumerate() {
            // cooperative check between iterations; partial results are
            // dropped with the worker
            if self.cancelled() {
                self.finish_cancelled(&mut state, CancelReason::Requested);
                return;
            }

            let rating = self
                .ratings
                .fetch_rating(&result.track_name, &result.artist_name)
                .await;
            enriched.push(EnrichedTrack::new(result, rating));

            let _ = self.events.send(RunEvent::Progress {
                current: index + 1,
                total,
            });
        }

        self.advance(&mut state, RunState::Completed);
        let _ = self.events.send(RunEvent::Completed(enriched));
    }

    fn cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    fn finish_cancelled(&self, state: &mut RunState, reason: CancelReason) {
        self.advance(state, RunState::Cancelled);
        let _ = self.events.send(RunEvent::Cancelled(reason));
    }

    fn advance(&self, state: &mut RunState, next: RunState) {
        tracing::debug!(term = %self.term, from = ?state, to = ?next, "run state");
        *state = next;
    }
}

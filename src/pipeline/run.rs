//! Run lifecycle types: states, events, and the consumer-facing handle.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;

use crate::domain::EnrichedTrack;

/// Minimum number of distinct tracks a search must yield before enrichment
/// is worth running.
pub const MIN_DISTINCT_TRACKS: usize = 5;

/// States a pipeline run moves through.
///
/// `Completed`, `Cancelled`, and `Failed` are terminal; a subsequent search
/// creates a fresh run and supersedes this one's visible effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Searching,
    Deduping,
    Guarding,
    Enriching,
    Completed,
    Cancelled,
    Failed,
}

/// Why a run ended in `Cancelled`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelReason {
    /// The guard rejected the deduplicated result set. A policy rejection,
    /// not a system fault; recoverable by a new search.
    InsufficientResults {
        /// The originating request, for the notification text
        request: String,
        /// Distinct tracks actually found
        count: usize,
    },
    /// An external cancellation signal arrived.
    Requested,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::InsufficientResults { count, .. } => write!(
                f,
                "{count} distinct results found, but {MIN_DISTINCT_TRACKS} or more are needed"
            ),
            CancelReason::Requested => write!(f, "cancelled by request"),
        }
    }
}

/// Events a run delivers to its consumer.
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// One enrichment step finished. `current` is 1-based and strictly
    /// increasing; `total` is constant for the whole run.
    Progress { current: usize, total: usize },
    /// The run finished; the enriched list is handed off by value, exactly
    /// once.
    Completed(Vec<EnrichedTrack>),
    /// The run ended early and discarded any partial results.
    Cancelled(CancelReason),
    /// The run hit an unrecoverable search failure. The alert sink was
    /// already notified at the client boundary.
    Failed(String),
}

/// Consumer handle for one in-flight run.
///
/// Dropping the handle does not stop the worker; call [`RunHandle::cancel`]
/// for that.
pub struct RunHandle {
    events: mpsc::UnboundedReceiver<RunEvent>,
    cancel: Arc<AtomicBool>,
}

impl RunHandle {
    pub(crate) fn new(
        events: mpsc::UnboundedReceiver<RunEvent>,
        cancel: Arc<AtomicBool>,
    ) -> Self {
        Self { events, cancel }
    }

    /// Request cooperative cancellation. The worker checks between
    /// enrichment iterations; an HTTP call already in flight completes and
    /// its result is discarded.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Next event from the run, or `None` once the worker is gone and all
    /// events have been drained.
    pub async fn next_event(&mut self) -> Option<RunEvent> {
        self.events.recv().await
    }
}

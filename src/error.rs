//! Application-wide error types.
//!
//! This module provides a unified error hierarchy for the application.
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling at the CLI
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Primary search error
    #[error("Search error: {0}")]
    Search(#[from] crate::search::SearchError),

    /// Credentials/key provider error
    #[error("Credentials error: {0}")]
    Key(#[from] crate::traits::KeyError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Lyrics requested for a track that has none to offer
    #[error("Lyrics error: {0}")]
    Lyrics(#[from] crate::pipeline::LyricsUnavailable),

    /// The run ended without producing results
    #[error("Run ended: {0}")]
    RunEnded(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchError;

    #[test]
    fn test_error_display() {
        let err = Error::from(SearchError::Network("connection refused".to_string()));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_lyrics_error_converts() {
        let err = Error::from(crate::pipeline::LyricsUnavailable);
        assert!(err.to_string().contains("without a rating"));
    }
}

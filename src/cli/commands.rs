//! CLI command definitions and dispatch.
//!
//! The CLI is the triggering context: it starts a run, renders the run's
//! events, and asks for lyrics on demand. All of the aggregation itself
//! happens on the pipeline's worker task.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::alert::{AlertSink, TracingSink};
use crate::config::{self, ConfigKeyProvider};
use crate::domain::EnrichedTrack;
use crate::error::Error;
use crate::pipeline::{DEFAULT_MEDIA, DEFAULT_TERM, Pipeline, RunEvent};
use crate::ratings::RatingsClient;
use crate::search::SearchClient;
use crate::traits::{ApiKeyProvider, StaticKey};

/// Tunescout CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search for tracks and enrich each with a rating
    Search {
        /// Free-text search term
        #[arg(default_value = DEFAULT_TERM)]
        term: String,
        /// Media type for the search
        #[arg(long, default_value = DEFAULT_MEDIA)]
        media: String,
        /// Secondary API key (or set MUSIXMATCH_API_KEY env var)
        #[arg(short, long, env = "MUSIXMATCH_API_KEY")]
        api_key: Option<String>,
        /// After the run completes, fetch lyrics for the named track
        #[arg(long, value_name = "TRACK_NAME")]
        lyrics: Option<String>,
    },
    /// Fetch lyrics for a track/artist pair directly
    Lyrics {
        /// Track name
        track: String,
        /// Artist name
        artist: String,
        /// Secondary API key (or set MUSIXMATCH_API_KEY env var)
        #[arg(short, long, env = "MUSIXMATCH_API_KEY")]
        api_key: Option<String>,
    },
    /// Store the secondary API key in the config file
    SetKey {
        /// The API key to store
        key: String,
    },
}

/// Dispatch a parsed command line.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Search {
            term,
            media,
            api_key,
            lyrics,
        } => cmd_search(term, media, api_key.as_deref(), lyrics.as_deref()),
        Commands::Lyrics {
            track,
            artist,
            api_key,
        } => cmd_lyrics(track, artist, api_key.as_deref()),
        Commands::SetKey { key } => Ok(cmd_set_key(key)?),
    }
}

fn key_provider(api_key: Option<&str>) -> Arc<dyn ApiKeyProvider> {
    match api_key {
        Some(key) => Arc::new(StaticKey::new(key)),
        None => Arc::new(ConfigKeyProvider::from_disk()),
    }
}

fn build_pipeline(api_key: Option<&str>) -> Pipeline {
    let sink: Arc<dyn AlertSink> = Arc::new(TracingSink);
    Pipeline::new(
        Arc::new(SearchClient::new(sink.clone())),
        Arc::new(RatingsClient::new(key_provider(api_key), sink.clone())),
        sink,
    )
}

/// Run one search-and-enrich pipeline and print the enriched list
fn cmd_search(
    term: &str,
    media: &str,
    api_key: Option<&str>,
    lyrics_for: Option<&str>,
) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    rt.block_on(async {
        let pipeline = build_pipeline(api_key);

        println!("Getting tracks for \"{term}\"...");
        let mut handle = pipeline.start_search_media(term, media);

        let mut tracks: Vec<EnrichedTrack> = Vec::new();
        while let Some(event) = handle.next_event().await {
            match event {
                RunEvent::Progress { current, total } => {
                    println!("[{current}/{total}] fetching ratings...");
                }
                RunEvent::Completed(list) => {
                    tracks = list;
                    break;
                }
                RunEvent::Cancelled(reason) => {
                    println!("✗ Search cancelled: {reason}");
                    return Ok(());
                }
                RunEvent::Failed(detail) => {
                    return Err(Error::RunEnded(detail).into());
                }
            }
        }

        println!("\nHere is the list of tracks...\n");
        for (i, track) in tracks.iter().enumerate() {
            let released = track
                .result
                .release_date_display()
                .unwrap_or_else(|| "?".to_string());
            println!(
                "{:2}. {} - {}",
                i + 1,
                track.result.track_name,
                track.result.artist_name
            );
            println!(
                "    Released: {released}    Rating: {}{}",
                track.rating_display(),
                if track.lyrics_available() {
                    "    (lyrics available)"
                } else {
                    ""
                }
            );
        }

        if let Some(name) = lyrics_for {
            let Some(track) = tracks
                .iter()
                .find(|t| t.result.track_name.eq_ignore_ascii_case(name))
            else {
                anyhow::bail!("no track named {name:?} in the results");
            };
            let lyrics = pipeline
                .fetch_lyrics_for(track)
                .await
                .map_err(Error::from)?;
            println!("\n--- {} ---\n{lyrics}", track.result.track_name);
        }

        Ok(())
    })
}

/// Fetch lyrics for a track/artist pair without running a search
fn cmd_lyrics(track: &str, artist: &str, api_key: Option<&str>) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    rt.block_on(async {
        let sink: Arc<dyn AlertSink> = Arc::new(TracingSink);
        let client = RatingsClient::new(key_provider(api_key), sink);

        let lyrics = client.fetch_lyrics(track, artist).await;
        println!("--- {track} ---\n{lyrics}");
        Ok(())
    })
}

/// Store the secondary API key in the config file
fn cmd_set_key(key: &str) -> crate::error::Result<()> {
    let mut config = config::load();
    config.credentials.musixmatch_api_key = Some(key.to_string());
    config::save(&config)?;
    if let Some(path) = config::config_path() {
        println!("✓ API key saved to {}", path.display());
    }
    Ok(())
}

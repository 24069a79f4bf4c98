// Exhibitor feed: fetch the raw document, normalize field names, resolve photos.

pub mod handlers;
pub mod normalize;
pub mod photo;
pub mod source;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::ExhibitorRecord;

pub use normalize::normalize_feed;
pub use photo::{PhotoResolver, PhotoUrls};
pub use source::{FeedSource, FileFeedSource};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("could not read feed at {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("feed is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("feed document must be a JSON array")]
    NotAnArray,
}

/// Fetches and normalizes the feed.
pub async fn load_exhibitors(source: &dyn FeedSource) -> Result<Vec<ExhibitorRecord>, FeedError> {
    let raw = source.fetch().await?;
    let records = normalize_feed(&raw)?;
    info!(
        source = %source.describe(),
        count = records.len(),
        "Exhibitor feed loaded"
    );
    Ok(records)
}

/// Like `load_exhibitors`, but an unusable feed leaves the gallery empty instead of failing.
/// An empty gallery serves empty pages; nothing else changes.
pub async fn load_exhibitors_or_empty(source: &dyn FeedSource) -> Vec<ExhibitorRecord> {
    match load_exhibitors(source).await {
        Ok(records) => records,
        Err(e) => {
            warn!(source = %source.describe(), error = %e, "Exhibitor feed unavailable; gallery disabled");
            Vec::new()
        }
    }
}

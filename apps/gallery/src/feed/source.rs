#![allow(dead_code)]

//! Feed sources: where the raw exhibitor document comes from.
//!
//! Default: `FileFeedSource` (JSON file on disk, re-read on every load).
//! `StaticFeedSource` holds an in-memory document for tests and fixtures.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use crate::feed::FeedError;

/// Carried by the loader as `&dyn FeedSource` so the backing store can change
/// without touching normalization or the session code.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Value, FeedError>;
}

pub struct FileFeedSource {
    path: PathBuf,
}

impl FileFeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Value, FeedError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FeedError::Read {
                location: self.describe(),
                source,
            })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

pub struct StaticFeedSource(pub Value);

#[async_trait]
impl FeedSource for StaticFeedSource {
    fn describe(&self) -> String {
        "in-memory feed".to_string()
    }

    async fn fetch(&self) -> Result<Value, FeedError> {
        Ok(self.0.clone())
    }
}

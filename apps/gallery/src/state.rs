use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::feed::{FeedSource, PhotoResolver};
use crate::models::ExhibitorRecord;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where the exhibitor document is read from. Default: `FileFeedSource` at `FEED_PATH`.
    pub feed: Arc<dyn FeedSource>,
    /// Current normalized feed. New sessions shuffle this; running sessions keep their own order.
    exhibitors: Arc<RwLock<Arc<Vec<ExhibitorRecord>>>>,
    pub sessions: SessionStore,
    pub photos: PhotoResolver,
}

impl AppState {
    pub fn new(config: Config, feed: Arc<dyn FeedSource>, records: Vec<ExhibitorRecord>) -> Self {
        let photos = PhotoResolver::new(&config.photo_prefix, &config.placeholder_photo);
        Self {
            config,
            feed,
            exhibitors: Arc::new(RwLock::new(Arc::new(records))),
            sessions: SessionStore::default(),
            photos,
        }
    }

    pub async fn exhibitors(&self) -> Arc<Vec<ExhibitorRecord>> {
        self.exhibitors.read().await.clone()
    }

    pub async fn replace_exhibitors(&self, records: Vec<ExhibitorRecord>) {
        *self.exhibitors.write().await = Arc::new(records);
    }
}

use serde::{Deserialize, Serialize};

/// Identity key of an exhibitor. Used to detect repeats across pages.
pub type ExhibitorKey = i64;

/// A normalized exhibitor profile. Immutable once built by the feed normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitorRecord {
    pub number: ExhibitorKey,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub photo_path: String,
}

impl ExhibitorRecord {
    pub fn key(&self) -> ExhibitorKey {
        self.number
    }
}

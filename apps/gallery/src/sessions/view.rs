use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::carousel::{Step, ViewMode};
use crate::feed::{PhotoResolver, PhotoUrls};
use crate::models::{ExhibitorKey, ExhibitorRecord};

/// One card as the view layer needs it: content, photo URLs, visibility, bio size.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub slot: usize,
    pub number: ExhibitorKey,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub photo: PhotoUrls,
    /// False for window slots hidden at the current viewport width.
    pub visible: bool,
    pub bio_font_px: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub mode: ViewMode,
    pub step: Step,
    pub cursor: usize,
    pub total: usize,
    pub card_width_px: f32,
    pub transition_in_flight: Option<Uuid>,
    pub cards: Vec<CardView>,
}

pub fn card_view(
    slot: usize,
    record: &ExhibitorRecord,
    visible: bool,
    bio_font_px: f32,
    photos: &PhotoResolver,
) -> CardView {
    CardView {
        slot,
        number: record.number,
        name: record.name.clone(),
        role: record.role.clone(),
        bio: record.bio.clone(),
        photo: photos.resolve(&record.photo_path),
        visible,
        bio_font_px,
    }
}

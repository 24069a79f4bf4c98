//! Axum route handler for reloading the exhibitor feed.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::feed::load_exhibitors;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub exhibitors: usize,
}

/// POST /api/v1/feed/reload
///
/// Only sessions created after the reload see the new records; running sessions
/// keep the order they were given.
pub async fn handle_reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let records = load_exhibitors(state.feed.as_ref()).await?;
    let count = records.len();
    state.replace_exhibitors(records).await;
    info!(exhibitors = count, "Feed reloaded");
    Ok(Json(ReloadResponse { exhibitors: count }))
}

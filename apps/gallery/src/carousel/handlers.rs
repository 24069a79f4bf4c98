//! Axum route handler for independent random pages.

use std::collections::HashSet;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::carousel::pick_random_page;
use crate::errors::AppError;
use crate::fit::auto_fit::default_font_px;
use crate::fit::{auto_fit, FitBounds, MetricMeasurer};
use crate::models::ExhibitorKey;
use crate::sessions::{card_view, CardView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RandomPageQuery {
    /// Comma-separated keys shown on the previous page, e.g. `3,17,8`.
    pub exclude: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RandomPageResponse {
    pub cards: Vec<CardView>,
}

/// GET /api/v1/random-page
pub async fn handle_random_page(
    State(state): State<AppState>,
    Query(query): Query<RandomPageQuery>,
) -> Result<Json<RandomPageResponse>, AppError> {
    let previous = parse_key_list(query.exclude.as_deref().unwrap_or(""))?;
    let records = state.exhibitors().await;
    let page = pick_random_page(&records, &previous, &mut rand::rng());

    let cw = state.config.card_width_px;
    let measurer = MetricMeasurer::for_card(cw);
    let bounds = FitBounds::for_card_width(cw);
    let cards = page
        .iter()
        .enumerate()
        .map(|(slot, record)| {
            let fitted = auto_fit(
                &measurer,
                &record.bio,
                state.config.bio_box_height_px,
                default_font_px(cw),
                bounds,
            );
            card_view(slot, record, true, fitted.font_px, &state.photos)
        })
        .collect();

    Ok(Json(RandomPageResponse { cards }))
}

fn parse_key_list(raw: &str) -> Result<HashSet<ExhibitorKey>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<ExhibitorKey>()
                .map_err(|_| AppError::Validation(format!("exclude: '{s}' is not an exhibitor number")))
        })
        .collect()
}

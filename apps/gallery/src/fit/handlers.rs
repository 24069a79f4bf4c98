//! Axum route handler for stand-alone auto-fit requests.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::fit::{fit_block, FitBounds, FitOutcome, FitTarget, MetricMeasurer};
use crate::sessions::handlers::validate_card_width;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FitRequest {
    pub text: Option<String>,
    pub container_height_px: Option<f32>,
    pub card_width_px: Option<f32>,
    pub initial_font_px: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct FitResponse {
    /// False when the text or container was missing and nothing was fitted.
    pub applied: bool,
    pub bounds: FitBounds,
    pub outcome: Option<FitOutcome>,
}

/// POST /api/v1/fit
pub async fn handle_fit(
    State(state): State<AppState>,
    Json(req): Json<FitRequest>,
) -> Result<Json<FitResponse>, AppError> {
    let cw = validate_card_width(req.card_width_px)?.unwrap_or(state.config.card_width_px);
    if let Some(h) = req.container_height_px {
        if !h.is_finite() || h < 0.0 {
            return Err(AppError::Validation(format!(
                "container_height_px must be a non-negative number, got {h}"
            )));
        }
    }

    let target = FitTarget {
        text: req.text.as_deref(),
        container_height_px: req.container_height_px,
        initial_font_px: req.initial_font_px,
    };
    let outcome = fit_block(&MetricMeasurer::for_card(cw), &target, cw);

    Ok(Json(FitResponse {
        applied: outcome.is_some(),
        bounds: FitBounds::for_card_width(cw),
        outcome,
    }))
}

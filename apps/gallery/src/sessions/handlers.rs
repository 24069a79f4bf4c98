//! Axum route handlers for viewer sessions.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::carousel::{transition, CarouselController, Direction, Step, TransitionOutcome};
use crate::errors::AppError;
use crate::sessions::session::{FitProfile, Session, SharedSession};
use crate::sessions::view::SessionView;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub viewport_width: Option<u32>,
    pub card_width_px: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct ViewportRequest {
    pub width: u32,
    pub card_width_px: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct TransitionEndRequest {
    pub transition_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SlideResponse {
    pub transition_id: Uuid,
    pub direction: Direction,
    pub view: SessionView,
}

#[derive(Debug, Serialize)]
pub struct TransitionEndResponse {
    /// False when the slide had already settled (late or duplicate report).
    pub acknowledged: bool,
    pub view: SessionView,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let card_width_px = validate_card_width(req.card_width_px)?.unwrap_or(state.config.card_width_px);
    let step = req.viewport_width.map(Step::for_width).unwrap_or_default();

    let pruned = state.sessions.prune_idle(state.config.session_ttl).await;
    if pruned > 0 {
        info!(pruned, "Pruned idle sessions");
    }

    let records = state.exhibitors().await;
    // The thread RNG is not Send; keep it out of any await.
    let controller = CarouselController::new(&records, step, &mut rand::rng());
    let fit = FitProfile {
        card_width_px,
        bio_box_height_px: state.config.bio_box_height_px,
    };

    let id = Uuid::new_v4();
    let shared = Session::spawn_shared(id, controller, fit, state.config.resize_debounce);
    let view = shared.lock().await.view(&state.photos);
    state.sessions.insert(id, shared).await;

    info!(session_id = %id, exhibitors = records.len(), ?step, "Session created");
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let shared = find_session(&state, id).await?;
    let mut session = shared.lock().await;
    session.touch();
    Ok(Json(session.view(&state.photos)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .remove(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    info!(session_id = %id, "Session discarded");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/next
pub async fn handle_next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SlideResponse>, AppError> {
    slide(&state, id, Direction::Next).await.map(Json)
}

/// POST /api/v1/sessions/:id/prev
pub async fn handle_prev(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SlideResponse>, AppError> {
    slide(&state, id, Direction::Prev).await.map(Json)
}

/// POST /api/v1/sessions/:id/transition-end
pub async fn handle_transition_end(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TransitionEndRequest>,
) -> Result<Json<TransitionEndResponse>, AppError> {
    let shared = find_session(&state, id).await?;
    let mut session = shared.lock().await;
    session.touch();
    let acknowledged = session.complete_transition(req.transition_id);
    Ok(Json(TransitionEndResponse {
        acknowledged,
        view: session.view(&state.photos),
    }))
}

/// POST /api/v1/sessions/:id/toggle-all
pub async fn handle_toggle_all(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let shared = find_session(&state, id).await?;
    let mut session = shared.lock().await;
    session.touch();
    let mode = session.toggle_all();
    info!(session_id = %id, ?mode, "View mode toggled");
    Ok(Json(session.view(&state.photos)))
}

/// POST /api/v1/sessions/:id/viewport
///
/// Applies the new step at once; the bio re-fit follows after the debounce period.
pub async fn handle_viewport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ViewportRequest>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let card_width_px = validate_card_width(req.card_width_px)?;
    let shared = find_session(&state, id).await?;
    let mut session = shared.lock().await;
    session.touch();
    session.set_viewport(req.width, card_width_px);
    Ok((StatusCode::ACCEPTED, Json(session.view(&state.photos))))
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Starts a slide and spawns the waiter that settles it on completion or timeout.
async fn slide(state: &AppState, id: Uuid, direction: Direction) -> Result<SlideResponse, AppError> {
    let shared = find_session(state, id).await?;

    let (start, pending, view) = {
        let mut session = shared.lock().await;
        session.touch();
        let start = session.begin_slide(direction)?;
        let (signal, pending) = transition(start.transition_id);
        session.arm_transition(signal);
        (start, pending, session.view(&state.photos))
    };

    let timeout = state.config.transition_timeout;
    let weak = Arc::downgrade(&shared);
    tokio::spawn(async move {
        let transition_id = pending.id();
        let outcome = pending.settle(timeout).await;
        if outcome == TransitionOutcome::TimedOut {
            warn!(
                session_id = %id,
                %transition_id,
                timeout_ms = timeout.as_millis() as u64,
                "No transition-end report; treating slide as finished"
            );
        }
        if let Some(shared) = weak.upgrade() {
            shared
                .lock()
                .await
                .settle_transition(transition_id, outcome);
        }
    });

    Ok(SlideResponse {
        transition_id: start.transition_id,
        direction: start.direction,
        view,
    })
}

async fn find_session(state: &AppState, id: Uuid) -> Result<SharedSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

pub(crate) fn validate_card_width(card_width_px: Option<f32>) -> Result<Option<f32>, AppError> {
    match card_width_px {
        Some(cw) if !cw.is_finite() || cw <= 0.0 => Err(AppError::Validation(format!(
            "card_width_px must be a positive number, got {cw}"
        ))),
        other => Ok(other),
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::carousel::CarouselError;
use crate::feed::FeedError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Carousel(#[from] CarouselError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Carousel(e @ CarouselError::TransitionInFlight(_)) => {
                (StatusCode::CONFLICT, "TRANSITION_IN_FLIGHT", e.to_string())
            }
            AppError::Carousel(e @ CarouselError::NotInCarousel) => {
                (StatusCode::CONFLICT, "NOT_IN_CAROUSEL", e.to_string())
            }
            AppError::Feed(e) => {
                tracing::error!("Feed error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "FEED_ERROR",
                    "The exhibitor feed could not be loaded".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

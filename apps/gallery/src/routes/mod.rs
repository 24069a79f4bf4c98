pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::carousel::handlers as carousel;
use crate::feed::handlers as feed;
use crate::fit::handlers as fit;
use crate::sessions::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions: one shuffled order per viewer
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/next", post(sessions::handle_next))
        .route("/api/v1/sessions/:id/prev", post(sessions::handle_prev))
        .route(
            "/api/v1/sessions/:id/transition-end",
            post(sessions::handle_transition_end),
        )
        .route(
            "/api/v1/sessions/:id/toggle-all",
            post(sessions::handle_toggle_all),
        )
        .route(
            "/api/v1/sessions/:id/viewport",
            post(sessions::handle_viewport),
        )
        // Stateless helpers
        .route("/api/v1/random-page", get(carousel::handle_random_page))
        .route("/api/v1/fit", post(fit::handle_fit))
        .route("/api/v1/feed/reload", post(feed::handle_reload))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::feed::source::StaticFeedSource;
    use crate::fixtures::make_records;

    fn make_app(n: usize) -> Router {
        let feed = StaticFeedSource(json!([
            { "num": 1, "exposant": "Forge Martin" },
            { "num": 2, "exposant": "Verrerie du Lac" }
        ]));
        build_router(AppState::new(
            Config::default(),
            Arc::new(feed),
            make_records(n),
        ))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn create_session(app: &Router, body: Value) -> String {
        let (status, view) = send(app, Method::POST, "/api/v1/sessions", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        view["session_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&make_app(0), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_session_returns_first_window() {
        let app = make_app(5);
        let (status, view) = send(
            &app,
            Method::POST,
            "/api/v1/sessions",
            Some(json!({ "viewport_width": 800 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(view["total"], 5);
        assert_eq!(view["cursor"], 0);
        assert_eq!(view["step"], "two");
        assert_eq!(view["mode"], "carousel");
        let cards = view["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2]["visible"], false);
        assert!(cards[0]["photo"]["url"]
            .as_str()
            .unwrap()
            .starts_with("photo_exposant/"));
    }

    #[tokio::test]
    async fn test_slide_lifecycle() {
        let app = make_app(5);
        let id = create_session(&app, json!({ "viewport_width": 400 })).await;
        let next = format!("/api/v1/sessions/{id}/next");

        let (status, slide) = send(&app, Method::POST, &next, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(slide["view"]["cursor"], 1);
        let transition_id = slide["transition_id"].clone();

        let (status, err) = send(&app, Method::POST, &next, None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(err["error"]["code"], "TRANSITION_IN_FLIGHT");

        let (status, done) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/transition-end"),
            Some(json!({ "transition_id": transition_id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(done["acknowledged"], true);
        assert_eq!(done["view"]["transition_in_flight"], Value::Null);

        let (status, slide) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/prev"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(slide["view"]["cursor"], 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_transition_times_out() {
        let app = make_app(5);
        let id = create_session(&app, json!({})).await;
        let next = format!("/api/v1/sessions/{id}/next");

        let (status, _) = send(&app, Method::POST, &next, None).await;
        assert_eq!(status, StatusCode::OK);

        tokio::time::sleep(Duration::from_secs(2)).await;
        let (status, slide) = send(&app, Method::POST, &next, None).await;
        assert_eq!(status, StatusCode::OK, "timed-out slide must not block navigation");
        assert_eq!(slide["view"]["cursor"], 1, "two steps of 3 over 5 records");
    }

    #[tokio::test]
    async fn test_show_all_blocks_navigation() {
        let app = make_app(6);
        let id = create_session(&app, json!({})).await;

        let (status, view) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/toggle-all"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["mode"], "all");
        assert_eq!(view["cards"].as_array().unwrap().len(), 6);

        let (status, err) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/next"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(err["error"]["code"], "NOT_IN_CAROUSEL");
    }

    #[tokio::test]
    async fn test_viewport_changes_step() {
        let app = make_app(5);
        let id = create_session(&app, json!({ "viewport_width": 1400 })).await;
        let (status, view) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/viewport"),
            Some(json!({ "width": 500 })),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(view["step"], "one");
    }

    #[tokio::test]
    async fn test_invalid_card_width_rejected() {
        let app = make_app(5);
        let (status, err) = send(
            &app,
            Method::POST,
            "/api/v1/sessions",
            Some(json!({ "card_width_px": -3.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_and_deleted_sessions_are_not_found() {
        let app = make_app(3);
        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/api/v1/sessions/{}", uuid::Uuid::new_v4()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let id = create_session(&app, json!({})).await;
        let uri = format!("/api/v1/sessions/{id}");
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_gallery_serves_empty_pages() {
        let app = make_app(0);
        let id = create_session(&app, json!({})).await;
        let (status, slide) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/next"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(slide["view"]["cards"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_random_page_avoids_excluded_keys() {
        let app = make_app(6);
        let (status, body) = send(&app, Method::GET, "/api/v1/random-page?exclude=1,2,3", None).await;
        assert_eq!(status, StatusCode::OK);
        let cards = body["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 3);
        for card in cards {
            let n = card["number"].as_i64().unwrap();
            assert!(n > 3, "card {n} was on the previous page");
        }

        let (status, _) = send(&app, Method::GET, "/api/v1/random-page?exclude=x", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_fit_endpoint() {
        let app = make_app(0);
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/fit",
            Some(json!({ "text": "Bols en grès.", "container_height_px": 120.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["applied"], true);
        let font = body["outcome"]["font_px"].as_f64().unwrap();
        let max = body["bounds"]["max_px"].as_f64().unwrap();
        assert!((font - max).abs() < 1e-4, "short text grows to the max size");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/fit",
            Some(json!({ "text": "Bols en grès." })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["applied"], false);
        assert_eq!(body["outcome"], Value::Null);
    }

    #[tokio::test]
    async fn test_feed_reload_affects_new_sessions() {
        let app = make_app(5);
        let (status, body) = send(&app, Method::POST, "/api/v1/feed/reload", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["exhibitors"], 2);

        let (_, view) = send(&app, Method::POST, "/api/v1/sessions", Some(json!({}))).await;
        assert_eq!(view["total"], 2);
    }
}

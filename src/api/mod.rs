//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/toggle", post(toggle_handler))
        .route("/frame", get(frame_handler))
        .route("/layout", get(placements_handler).post(layout_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        clock::ManualClock,
        layout::{DialAnchor, RadialLayoutEngine},
    };

    fn router() -> (ManualClock, Router) {
        let clock = ManualClock::new();
        let state = Arc::new(AppState::with_clock(
            20554,
            "127.0.0.1".to_string(),
            Arc::new(clock.clone()),
            RadialLayoutEngine::new(12, DialAnchor::Bottom),
        ));
        (clock, create_router(state))
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = router.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn toggle_start_and_stop() {
        let (clock, router) = router();

        let (status, body) = send(&router, Method::POST, "/toggle", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");

        clock.advance(65_234);
        let (_, body) = send(&router, Method::POST, "/toggle", None).await;
        assert_eq!(body["status"], "stopped");
        assert_eq!(body["frame"]["clock"], "01:05");
        assert_eq!(body["frame"]["millis"], "234");

        clock.advance(1_000);
        let (_, status_body) = send(&router, Method::GET, "/status", None).await;
        assert_eq!(status_body["running"], false);
        assert_eq!(status_body["elapsed_ms"], 65_234);
        assert_eq!(status_body["refresh_period_ms"], 83);
        assert_eq!(status_body["anchor"], "bottom");
        assert_eq!(status_body["last_action"], "stop");
    }

    #[tokio::test]
    async fn layout_is_reported_once() {
        let (_, router) = router();

        let (status, _) = send(&router, Method::GET, "/layout", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let request = json!({
            "container": { "width": 360, "height": 360 },
            "tick_image": { "width": 20, "height": 20 }
        });
        let (status, body) = send(&router, Method::POST, "/layout", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["created"], true);
        assert_eq!(body["placements"].as_array().unwrap().len(), 12);
        assert_eq!(body["placements"][0]["translate_x"], 170.0);
        assert_eq!(body["placements"][0]["rotation_deg"], 0.0);

        let resize = json!({
            "container": { "width": 1000, "height": 500, "padding_left": 8 },
            "tick_image": { "width": 20, "height": 20 }
        });
        let (_, again) = send(&router, Method::POST, "/layout", Some(resize)).await;
        assert_eq!(again["created"], false);
        assert_eq!(again["placements"], body["placements"]);

        let (status, stored) = send(&router, Method::GET, "/layout", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stored["placements"], body["placements"]);
    }

    #[tokio::test]
    async fn overflowing_layout_is_clamped() {
        let (_, router) = router();

        let request = json!({
            "container": { "width": 0, "height": 0, "padding_left": i32::MAX, "padding_right": i32::MAX },
            "tick_image": { "width": 20, "height": 20 }
        });
        let (status, body) = send(&router, Method::POST, "/layout", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["placements"].as_array().unwrap().len(), 12);

        let (status, _) = send(&router, Method::GET, "/layout", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, status_body) = send(&router, Method::GET, "/status", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(status_body["laid_out"], true);
    }

    #[tokio::test]
    async fn negative_measurements_are_rejected() {
        let (_, router) = router();

        let request = json!({
            "container": { "width": 360, "height": 360, "padding_top": -5 },
            "tick_image": { "width": 20, "height": 20 }
        });
        let (status, _) = send(&router, Method::POST, "/layout", Some(request)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&router, Method::GET, "/layout", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn frame_and_health() {
        let (_, router) = router();

        let (status, frame) = send(&router, Method::GET, "/frame", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(frame["clock"], "00:00");
        assert_eq!(frame["visible"].as_array().unwrap().len(), 12);
        assert!(frame["hidden_tick"].is_null());

        let (status, health) = send(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health["status"], "ok");
    }
}

//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{render::Frame, state::AppState};
use super::responses::{HealthResponse, LayoutRequest, LayoutResponse, StatusResponse, ToggleResponse};

/// Handle POST /toggle - Start or stop the stopwatch
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ToggleResponse>, StatusCode> {
    match state.toggle() {
        Ok((running, frame)) => {
            info!("Toggle endpoint called - stopwatch {}", if running { "running" } else { "stopped" });
            Ok(Json(ToggleResponse::new(running, frame)))
        }
        Err(e) => {
            error!("Failed to toggle stopwatch: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /frame - Return the latest rendered frame
pub async fn frame_handler(State(state): State<Arc<AppState>>) -> Json<Frame> {
    Json(state.current_frame())
}

/// Handle POST /layout - Report the container size and get tick placements
pub async fn layout_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LayoutRequest>,
) -> Result<Json<LayoutResponse>, StatusCode> {
    if !request.container.is_well_formed() || !request.tick_image.is_well_formed() {
        warn!("Rejecting layout with negative measurements: {:?}", request);
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    match state.layout(&request.container, &request.tick_image) {
        Ok((placements, created)) => Ok(Json(LayoutResponse { created, placements })),
        Err(e) => {
            error!("Failed to lay out dial: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /layout - Return stored placements
pub async fn placements_handler(State(state): State<Arc<AppState>>) -> Result<Json<LayoutResponse>, StatusCode> {
    match state.placements() {
        Ok(Some(placements)) => Ok(Json(LayoutResponse { created: false, placements })),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to read placements: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return current stopwatch status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer_state = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let laid_out = match state.placements() {
        Ok(placements) => placements.is_some(),
        Err(e) => {
            error!("Failed to read placements: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        running: timer_state.running,
        elapsed_ms: timer_state.elapsed_ms,
        frame: state.current_frame(),
        tick_count: state.tick_count,
        anchor: state.anchor,
        refresh_period_ms: state.refresh_period().as_millis() as u64,
        laid_out,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

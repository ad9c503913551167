//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    layout::{ContainerMetrics, DialAnchor, Placement, TickImage},
    render::Frame,
};

/// Response for the toggle endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub frame: Frame,
}

impl ToggleResponse {
    pub fn new(running: bool, frame: Frame) -> Self {
        Self {
            status: if running { "running" } else { "stopped" }.to_string(),
            timestamp: Utc::now(),
            frame,
        }
    }
}

/// Body of a layout request: the measured container and the tick image size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub container: ContainerMetrics,
    pub tick_image: TickImage,
}

/// Placements for every tick, in tick order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResponse {
    /// `false` when the dial had already been laid out
    pub created: bool,
    pub placements: Vec<Placement>,
}

/// Full stopwatch status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub running: bool,
    pub elapsed_ms: i64,
    pub frame: Frame,
    pub tick_count: usize,
    pub anchor: DialAnchor,
    pub refresh_period_ms: u64,
    pub laid_out: bool,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

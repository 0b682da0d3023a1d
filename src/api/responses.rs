//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{controller::format_remaining, state::TimerSnapshot};

/// Body of `POST /start`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRequest {
    /// Text as it would be typed into the seconds field
    pub input: String,
}

/// API response structure for start and stop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: &str, message: String, timer: TimerSnapshot) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Response reflecting whether the timer is running
    pub fn from_snapshot(message: String, timer: TimerSnapshot) -> Self {
        let status = if timer.session.is_running() { "running" } else { "idle" };
        Self::new(status, message, timer)
    }

    /// Create an error response
    pub fn error(message: String, timer: TimerSnapshot) -> Self {
        Self::new("error", message, timer)
    }
}

/// Status response with the rendered remaining time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub running: bool,
    pub remaining_seconds: u64,
    /// `MM:SS` while running
    pub remaining: Option<String>,
    pub timer: TimerSnapshot,
    pub uptime: String,
}

impl StatusResponse {
    pub fn new(timer: TimerSnapshot, uptime: String) -> Self {
        let running = timer.session.is_running();
        let remaining_seconds = timer.session.remaining_seconds();
        Self {
            running,
            remaining_seconds,
            remaining: running.then(|| format_remaining(remaining_seconds)),
            timer,
            uptime,
        }
    }
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

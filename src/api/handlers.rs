//! HTTP endpoint handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::AppState;
use super::responses::{ApiResponse, HealthResponse, StartRequest, StatusResponse};

/// Handle POST /start - Start a countdown from the given input text
pub async fn start_handler(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)> {
    match state.start(request.input).await {
        Ok(Ok(timer)) => {
            info!("Start endpoint called - running={}", timer.session.is_running());
            Ok(Json(ApiResponse::from_snapshot("Countdown started".to_string(), timer)))
        }
        Ok(Err(e)) => {
            info!("Start endpoint rejected input: {}", e);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::error(e.to_string(), state.snapshot())),
            ))
        }
        Err(e) => {
            error!("Failed to start countdown: {}", e);
            Err(unavailable(&state, e.to_string()))
        }
    }
}

/// Handle POST /stop - Stop the running countdown
pub async fn stop_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)> {
    match state.stop().await {
        Ok(timer) => {
            info!("Stop endpoint called - countdown stopped");
            Ok(Json(ApiResponse::from_snapshot("Countdown stopped".to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to stop countdown: {}", e);
            Err(unavailable(&state, e.to_string()))
        }
    }
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse::new(state.snapshot(), state.get_uptime()))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

fn unavailable(state: &AppState, message: String) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiResponse::error(message, state.snapshot())),
    )
}

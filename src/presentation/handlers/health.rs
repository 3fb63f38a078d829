use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

pub const LIVENESS_MESSAGE: &str = "AI Interviewer Backend Running";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub active_sessions: Option<usize>,
}

pub async fn index_handler() -> &'static str {
    LIVENESS_MESSAGE
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let active_sessions = match state.session_store.len().await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Session store unavailable during health check");
            None
        }
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            active_sessions,
        }),
    )
}

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{Performance, SessionId, round2};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub state: String,
    pub turns_completed: u32,
    pub max_turns: u32,
    pub accumulated_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<Performance>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn session_status_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(error) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
        }
    };

    match state.interview_service.session(id).await {
        Ok(Some(session)) => {
            let summary = session.phase.summary();
            let response = SessionStatusResponse {
                session_id: session.id.to_string(),
                state: session.phase.as_str().to_string(),
                turns_completed: session.phase.turn_count(),
                max_turns: state.interview_service.rules().max_turns,
                accumulated_score: round2(session.phase.accumulated_score()),
                current_question: session.phase.current_question().map(str::to_string),
                average_score: summary.map(|s| s.average_score),
                performance: summary.map(|s| s.performance),
                created_at: session.created_at.to_rfc3339(),
                updated_at: session.updated_at.to_rfc3339(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Session not found: {}", session_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch session");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch session: {}", e),
                }),
            )
                .into_response()
        }
    }
}

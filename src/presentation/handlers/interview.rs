use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::application::ports::RepositoryError;
use crate::application::services::{InterviewError, TurnOutcome, TurnRequest};
use crate::domain::{Performance, SessionId, round2};
use crate::infrastructure::observability::sanitize_answer;
use crate::presentation::state::AppState;

#[derive(Debug, Default, PartialEq)]
pub struct InterviewRequest {
    pub session_id: Option<String>,
    pub reset: bool,
    pub answer: Option<String>,
    pub image: Option<String>,
}

impl InterviewRequest {
    /// Reads each field on its own, so one mistyped field does not discard the rest.
    pub fn from_json(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            tracing::warn!("Interview request body is not a JSON object; treating as empty");
            return Self::default();
        };

        Self {
            session_id: string_field(fields, "session_id"),
            reset: fields.get("reset").is_some_and(truthy),
            answer: string_field(fields, "answer"),
            image: string_field(fields, "image"),
        }
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => {
            tracing::warn!(field = name, kind = json_kind(other), "Ignoring non-string field");
            None
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => {
            let text = text.trim();
            !(text.is_empty() || text == "0" || text.eq_ignore_ascii_case("false"))
        }
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum InterviewResponse {
    Started {
        session_id: String,
        audio: String,
    },
    InProgress {
        session_id: String,
        audio: String,
        current_score: f64,
        turn_score: f64,
        turns_completed: u32,
    },
    Complete {
        session_id: String,
        interview_complete: bool,
        average_score: f64,
        performance: Performance,
        audio: String,
    },
}

impl From<TurnOutcome> for InterviewResponse {
    fn from(outcome: TurnOutcome) -> Self {
        match outcome {
            TurnOutcome::Started {
                session_id, audio, ..
            } => InterviewResponse::Started {
                session_id: session_id.to_string(),
                audio,
            },
            TurnOutcome::Continued {
                session_id,
                audio,
                score,
                accumulated_score,
                turns_completed,
                ..
            } => InterviewResponse::InProgress {
                session_id: session_id.to_string(),
                audio,
                current_score: round2(accumulated_score),
                turn_score: round2(score.composite),
                turns_completed,
            },
            TurnOutcome::Completed {
                session_id,
                summary,
                audio,
                ..
            } => InterviewResponse::Complete {
                session_id: session_id.to_string(),
                interview_complete: true,
                average_score: summary.average_score,
                performance: summary.performance,
                audio,
            },
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A body that is empty or not valid JSON counts as `{}`.
pub fn parse_request(body: &[u8]) -> InterviewRequest {
    if body.iter().all(u8::is_ascii_whitespace) {
        return InterviewRequest::default();
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value) => InterviewRequest::from_json(&value),
        Err(e) => {
            tracing::warn!(error = %e, "Malformed interview request body; treating as empty");
            InterviewRequest::default()
        }
    }
}

fn resolve_session_id(raw: Option<&str>) -> Result<SessionId, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(SessionId::default_session()),
        Some(raw) => raw.parse(),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn interview_handler(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let request = parse_request(&body);

    let session_id = match resolve_session_id(request.session_id.as_deref()) {
        Ok(id) => id,
        Err(error) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
        }
    };

    tracing::debug!(
        session_id = %session_id,
        reset = request.reset,
        answer = %request.answer.as_deref().map(sanitize_answer).unwrap_or_default(),
        has_image = request.image.is_some(),
        "Processing interview turn"
    );

    let turn = TurnRequest {
        session_id,
        reset: request.reset,
        answer: request.answer,
        image: request.image,
    };

    match state.interview_service.take_turn(turn).await {
        Ok(outcome) => (StatusCode::OK, Json(InterviewResponse::from(outcome))).into_response(),
        Err(InterviewError::Session(e)) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(InterviewError::Storage(e @ RepositoryError::CapacityExceeded(_))) => {
            tracing::warn!(session_id = %session_id, error = %e, "Interview turn refused");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(session_id = %session_id, error = %e, "Interview turn failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Interview turn failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}

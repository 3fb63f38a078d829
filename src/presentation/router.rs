use axum::Router;
use axum::http::{HeaderName, Method};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, HttpMakeClassifier, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::{REQUEST_ID_HEADER, request_id_middleware};
use crate::presentation::handlers::{
    health_handler, index_handler, interview_handler, session_status_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/interview", post(interview_handler))
        .route("/interview/{session_id}", get(session_status_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(http_trace_layer())
        .layer(frontend_cors())
        .with_state(state)
}

/// The browser frontend is served from a different origin and posts camera frames.
fn frontend_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

fn http_trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

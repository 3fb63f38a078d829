use std::sync::Arc;

use crate::application::ports::SessionStore;
use crate::application::services::InterviewService;

#[derive(Clone)]
pub struct AppState {
    pub interview_service: Arc<InterviewService>,
    pub session_store: Arc<dyn SessionStore>,
}

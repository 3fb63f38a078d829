mod health;
mod interview;
mod session_status;

pub use health::{LIVENESS_MESSAGE, health_handler, index_handler};
pub use interview::{InterviewRequest, InterviewResponse, interview_handler, parse_request};
pub use session_status::session_status_handler;

mod frame_decoder;
mod interview_service;
mod signal_scorer;

pub use frame_decoder::decode_frame;
pub use interview_service::{
    InterviewError, InterviewService, TurnOutcome, TurnRequest, ensure_question_mark,
};
pub use signal_scorer::{ScoringError, SignalScorer, TurnScore};

mod emotion;
mod interview_rules;
mod performance;
mod scoring;
mod session;
mod session_id;

pub use emotion::{EmotionDistribution, EmotionLabel, EmotionWeights};
pub use interview_rules::{DEFAULT_MAX_TURNS, InterviewRules, OPENING_QUESTION};
pub use performance::{Performance, PerformanceThresholds};
pub use scoring::{
    CompositeWeights, LengthRule, SentimentLabel, SentimentPrediction, SignalScores, round2,
    word_count,
};
pub use session::{
    AnsweredTurn, InterviewSummary, PendingQuestion, Session, SessionError, SessionPhase,
};
pub use session_id::SessionId;

use super::emotion::EmotionWeights;
use super::performance::{Performance, PerformanceThresholds};
use super::scoring::{CompositeWeights, LengthRule};

pub const DEFAULT_MAX_TURNS: u32 = 5;
pub const OPENING_QUESTION: &str = "Tell me about yourself.";
const GREETING: &str = "Hello interviewee. I am your AI interviewer. Let us begin.";

/// Every constant that shapes scoring and session length.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewRules {
    pub max_turns: u32,
    pub composite_weights: CompositeWeights,
    pub length_rule: LengthRule,
    pub emotion_weights: EmotionWeights,
    pub performance_thresholds: PerformanceThresholds,
    pub opening_question: String,
}

impl InterviewRules {
    /// What the interviewer says when a session starts.
    pub fn opening_announcement(&self) -> String {
        format!("{} {}", GREETING, self.opening_question)
    }

    pub fn completion_announcement(&self, average_score: f64, performance: Performance) -> String {
        format!(
            "Your interview is complete. Your average score is {}. Overall performance is {}.",
            average_score, performance
        )
    }
}

impl Default for InterviewRules {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            composite_weights: CompositeWeights::default(),
            length_rule: LengthRule::default(),
            emotion_weights: EmotionWeights::default(),
            performance_thresholds: PerformanceThresholds::default(),
            opening_question: OPENING_QUESTION.to_string(),
        }
    }
}

//! The interview session state machine.
//!
//! Transitions are computed on detached values: [`SessionPhase::after_answer`]
//! never mutates, and the caller commits the resulting phase with
//! [`Session::commit`] once every side effect of the turn has succeeded.

use chrono::{DateTime, Utc};

use super::interview_rules::InterviewRules;
use super::performance::Performance;
use super::scoring::round2;
use super::session_id::SessionId;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    NotStarted,
    InProgress {
        current_question: String,
        turn_count: u32,
        accumulated_score: f64,
    },
    Complete(InterviewSummary),
}

impl SessionPhase {
    /// The phase entered when the opening question is asked. No turn is consumed.
    pub fn opening(rules: &InterviewRules) -> Self {
        SessionPhase::InProgress {
            current_question: rules.opening_question.clone(),
            turn_count: 0,
            accumulated_score: 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::NotStarted => "not_started",
            SessionPhase::InProgress { .. } => "in_progress",
            SessionPhase::Complete(_) => "complete",
        }
    }

    pub fn turn_count(&self) -> u32 {
        match self {
            SessionPhase::NotStarted => 0,
            SessionPhase::InProgress { turn_count, .. } => *turn_count,
            SessionPhase::Complete(summary) => summary.turn_count,
        }
    }

    pub fn accumulated_score(&self) -> f64 {
        match self {
            SessionPhase::NotStarted => 0.0,
            SessionPhase::InProgress {
                accumulated_score, ..
            } => *accumulated_score,
            SessionPhase::Complete(summary) => summary.accumulated_score,
        }
    }

    pub fn current_question(&self) -> Option<&str> {
        match self {
            SessionPhase::InProgress {
                current_question, ..
            } => Some(current_question),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&InterviewSummary> {
        match self {
            SessionPhase::Complete(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SessionPhase::Complete(_))
    }

    /// Folds one scored answer into the running totals.
    pub fn after_answer(
        &self,
        composite_score: f64,
        rules: &InterviewRules,
    ) -> Result<AnsweredTurn, SessionError> {
        let (current_question, turn_count, accumulated_score) = match self {
            SessionPhase::NotStarted => return Err(SessionError::NotStarted),
            SessionPhase::Complete(_) => return Err(SessionError::AlreadyComplete),
            SessionPhase::InProgress {
                current_question,
                turn_count,
                accumulated_score,
            } => (current_question, *turn_count, *accumulated_score),
        };

        let turn_count = turn_count + 1;
        let accumulated_score = accumulated_score + composite_score;

        if turn_count >= rules.max_turns {
            return Ok(AnsweredTurn::Finished(InterviewSummary::from_totals(
                turn_count,
                accumulated_score,
                rules,
            )));
        }

        Ok(AnsweredTurn::Continuing(PendingQuestion {
            previous_question: current_question.clone(),
            turn_count,
            accumulated_score,
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterviewSummary {
    pub turn_count: u32,
    pub accumulated_score: f64,
    pub average_score: f64,
    pub performance: Performance,
}

impl InterviewSummary {
    /// The average divides by the configured turn limit, not by turns taken.
    pub fn from_totals(turn_count: u32, accumulated_score: f64, rules: &InterviewRules) -> Self {
        let average_score = round2(accumulated_score / f64::from(rules.max_turns));
        Self {
            turn_count,
            accumulated_score,
            average_score,
            performance: rules.performance_thresholds.classify(average_score),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnsweredTurn {
    Continuing(PendingQuestion),
    Finished(InterviewSummary),
}

/// A scored turn that still needs its follow-up question.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuestion {
    previous_question: String,
    turn_count: u32,
    accumulated_score: f64,
}

impl PendingQuestion {
    pub fn previous_question(&self) -> &str {
        &self.previous_question
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn accumulated_score(&self) -> f64 {
        self.accumulated_score
    }

    pub fn ask(self, next_question: String) -> SessionPhase {
        SessionPhase::InProgress {
            current_question: next_question,
            turn_count: self.turn_count,
            accumulated_score: self.accumulated_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("interview already complete; reset the session to start again")]
    AlreadyComplete,
    #[error("interview has not started")]
    NotStarted,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub phase: SessionPhase,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id,
            phase: SessionPhase::NotStarted,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn reset(&mut self) {
        self.commit(SessionPhase::NotStarted);
    }

    pub fn commit(&mut self, phase: SessionPhase) {
        self.phase = phase;
        self.updated_at = Utc::now();
    }
}

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};

use crate::application::ports::{
    QuestionGenerationError, QuestionGenerator, RepositoryError, SessionStore,
    SpeechSynthesisError, SpeechSynthesizer,
};
use crate::application::services::signal_scorer::{ScoringError, SignalScorer, TurnScore};
use crate::domain::{
    AnsweredTurn, InterviewRules, InterviewSummary, Session, SessionError, SessionId,
    SessionPhase,
};

/// One request against a session.
#[derive(Debug, Clone, Default)]
pub struct TurnRequest {
    pub session_id: SessionId,
    pub reset: bool,
    pub answer: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Started {
        session_id: SessionId,
        question: String,
        audio: String,
    },
    Continued {
        session_id: SessionId,
        question: String,
        audio: String,
        score: TurnScore,
        accumulated_score: f64,
        turns_completed: u32,
    },
    Completed {
        session_id: SessionId,
        summary: InterviewSummary,
        score: TurnScore,
        audio: String,
    },
}

/// Drives sessions through their phases. A turn is applied to the stored
/// session only after scoring, question generation and speech synthesis all
/// succeed; any failure leaves the session as it was.
pub struct InterviewService {
    session_store: Arc<dyn SessionStore>,
    scorer: SignalScorer,
    question_generator: Arc<dyn QuestionGenerator>,
    speech_synthesizer: Arc<dyn SpeechSynthesizer>,
    rules: InterviewRules,
}

impl InterviewService {
    pub fn new(
        session_store: Arc<dyn SessionStore>,
        scorer: SignalScorer,
        question_generator: Arc<dyn QuestionGenerator>,
        speech_synthesizer: Arc<dyn SpeechSynthesizer>,
        rules: InterviewRules,
    ) -> Self {
        Self {
            session_store,
            scorer,
            question_generator,
            speech_synthesizer,
            rules,
        }
    }

    pub fn rules(&self) -> &InterviewRules {
        &self.rules
    }

    pub async fn take_turn(&self, request: TurnRequest) -> Result<TurnOutcome, InterviewError> {
        let handle = self.session_store.get_or_create(request.session_id).await?;
        let mut session = handle.lock().await;

        let phase = if request.reset {
            tracing::info!(session_id = %request.session_id, "Session reset requested");
            SessionPhase::NotStarted
        } else {
            session.phase.clone()
        };

        match &phase {
            SessionPhase::NotStarted => self.start(&mut session).await,
            SessionPhase::Complete(_) => {
                tracing::warn!(session_id = %session.id, "Turn requested on a completed interview");
                Err(SessionError::AlreadyComplete.into())
            }
            SessionPhase::InProgress { .. } => {
                let answer = request.answer.unwrap_or_default();
                self.answer(&mut session, &phase, &answer, request.image.as_deref())
                    .await
            }
        }
    }

    /// Returns a snapshot of the session, if it exists.
    pub async fn session(&self, id: SessionId) -> Result<Option<Session>, InterviewError> {
        let Some(handle) = self.session_store.get(id).await? else {
            return Ok(None);
        };
        let session = handle.lock().await;
        Ok(Some(session.clone()))
    }

    async fn start(&self, session: &mut Session) -> Result<TurnOutcome, InterviewError> {
        let audio = self.speak(&self.rules.opening_announcement()).await?;

        session.commit(SessionPhase::opening(&self.rules));
        tracing::info!(session_id = %session.id, "Interview started");

        Ok(TurnOutcome::Started {
            session_id: session.id,
            question: self.rules.opening_question.clone(),
            audio,
        })
    }

    async fn answer(
        &self,
        session: &mut Session,
        phase: &SessionPhase,
        answer: &str,
        image: Option<&str>,
    ) -> Result<TurnOutcome, InterviewError> {
        let score = self.scorer.score_turn(answer, image).await?;
        let answered = phase.after_answer(score.composite, &self.rules)?;

        tracing::info!(
            session_id = %session.id,
            sentiment = score.signals.sentiment,
            emotion = score.signals.emotion,
            length = score.signals.length,
            composite = score.composite,
            "Turn scored"
        );

        match answered {
            AnsweredTurn::Continuing(pending) => {
                let generated = self
                    .question_generator
                    .next_question(pending.previous_question(), answer)
                    .await?;
                let question = ensure_question_mark(&generated)?;
                let audio = self.speak(&question).await?;

                let turns_completed = pending.turn_count();
                let accumulated_score = pending.accumulated_score();
                session.commit(pending.ask(question.clone()));

                tracing::info!(
                    session_id = %session.id,
                    turns_completed,
                    accumulated_score,
                    "Next question asked"
                );

                Ok(TurnOutcome::Continued {
                    session_id: session.id,
                    question,
                    audio,
                    score,
                    accumulated_score,
                    turns_completed,
                })
            }
            AnsweredTurn::Finished(summary) => {
                let announcement = self
                    .rules
                    .completion_announcement(summary.average_score, summary.performance);
                let audio = self.speak(&announcement).await?;

                session.commit(SessionPhase::Complete(summary));

                tracing::info!(
                    session_id = %session.id,
                    average_score = summary.average_score,
                    performance = %summary.performance,
                    "Interview complete"
                );

                Ok(TurnOutcome::Completed {
                    session_id: session.id,
                    summary,
                    score,
                    audio,
                })
            }
        }
    }

    async fn speak(&self, text: &str) -> Result<String, SpeechSynthesisError> {
        let audio = self.speech_synthesizer.synthesize(text).await?;
        Ok(general_purpose::STANDARD.encode(audio))
    }
}

/// Trims a generated question and guarantees it ends with `?`.
pub fn ensure_question_mark(generated: &str) -> Result<String, QuestionGenerationError> {
    let question = generated.trim();
    if question.is_empty() {
        return Err(QuestionGenerationError::EmptyQuestion);
    }

    if question.ends_with('?') {
        Ok(question.to_string())
    } else {
        Ok(format!("{}?", question))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    #[error("session: {0}")]
    Session(#[from] SessionError),
    #[error("scoring: {0}")]
    Scoring(#[from] ScoringError),
    #[error("question generation: {0}")]
    QuestionGeneration(#[from] QuestionGenerationError),
    #[error("speech synthesis: {0}")]
    SpeechSynthesis(#[from] SpeechSynthesisError),
    #[error("session store: {0}")]
    Storage(#[from] RepositoryError),
}

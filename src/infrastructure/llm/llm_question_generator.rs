use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{LlmClient, QuestionGenerationError, QuestionGenerator};

const INTERVIEWER_INSTRUCTIONS: &str = "You are a technical interviewer.
Ask ONLY ONE short follow-up interview question based on the candidate's answer.
Make it clear, specific, and professional.
Do not write explanation, only the question.";

/// Asks a chat model for the follow-up question.
pub struct LlmQuestionGenerator {
    llm_client: Arc<dyn LlmClient>,
}

impl LlmQuestionGenerator {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    fn build_prompt(previous_question: &str, answer: &str) -> String {
        format!(
            "Previous question: {}\nCandidate answer: {}\n\nFollow-up question:",
            previous_question.trim(),
            answer.trim()
        )
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn next_question(
        &self,
        previous_question: &str,
        answer: &str,
    ) -> Result<String, QuestionGenerationError> {
        let prompt = Self::build_prompt(previous_question, answer);
        let completion = self
            .llm_client
            .complete(&prompt, INTERVIEWER_INSTRUCTIONS)
            .await?;

        // Models sometimes add a preamble line or wrap the question in quotes.
        completion
            .lines()
            .map(|line| line.trim().trim_matches('"').trim())
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .ok_or(QuestionGenerationError::EmptyQuestion)
    }
}

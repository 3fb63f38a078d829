use async_trait::async_trait;

use super::LlmClientError;

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn next_question(
        &self,
        previous_question: &str,
        answer: &str,
    ) -> Result<String, QuestionGenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionGenerationError {
    #[error("completion failed: {0}")]
    Completion(#[from] LlmClientError),
    #[error("generator returned an empty question")]
    EmptyQuestion,
    #[error("generator configuration invalid: {0}")]
    Misconfigured(String),
}

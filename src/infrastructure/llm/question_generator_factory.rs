use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClient, QuestionGenerationError, QuestionGenerator};
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::{LlmQuestionGenerator, MockLlmClient, OpenAiClient};

pub struct QuestionGeneratorFactory;

impl QuestionGeneratorFactory {
    pub fn create(
        settings: &LlmSettings,
    ) -> Result<Arc<dyn QuestionGenerator>, QuestionGenerationError> {
        let llm_client: Arc<dyn LlmClient> = match settings.provider {
            LlmProvider::OpenAi => {
                if settings.base_url.trim().is_empty() {
                    return Err(QuestionGenerationError::Misconfigured(
                        "llm.base_url must not be empty".to_string(),
                    ));
                }
                tracing::info!(
                    model = %settings.chat_model,
                    base_url = %settings.base_url,
                    "Using chat completion question generator"
                );
                Arc::new(OpenAiClient::new(
                    settings.api_key.clone(),
                    settings.base_url.clone(),
                    settings.chat_model.clone(),
                    settings.max_tokens,
                    settings.temperature,
                    Duration::from_secs(settings.timeout_secs),
                )?)
            }
            LlmProvider::Mock => {
                tracing::info!("Using mock question generator");
                Arc::new(MockLlmClient::default())
            }
        };

        Ok(Arc::new(LlmQuestionGenerator::new(llm_client)))
    }
}

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};
use crate::presentation::config::{SpeechProvider, SpeechSettings};

use super::{GoogleTranslateTts, MockSpeechSynthesizer, OpenAiSpeechSynthesizer};

pub struct SpeechSynthesizerFactory;

impl SpeechSynthesizerFactory {
    pub fn create(
        settings: &SpeechSettings,
    ) -> Result<Arc<dyn SpeechSynthesizer>, SpeechSynthesisError> {
        let timeout = Duration::from_secs(settings.timeout_secs);

        match settings.provider {
            SpeechProvider::Google => {
                tracing::info!(language = %settings.language, "Using Google Translate TTS");
                let synthesizer = GoogleTranslateTts::new(
                    settings.base_url.clone(),
                    settings.language.clone(),
                    timeout,
                )?;
                Ok(Arc::new(synthesizer))
            }
            SpeechProvider::OpenAi => {
                let key = settings
                    .api_key
                    .clone()
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| {
                        SpeechSynthesisError::Misconfigured(
                            "speech.api_key is required for the openai provider".to_string(),
                        )
                    })?;
                tracing::info!(model = %settings.model, voice = %settings.voice, "Using OpenAI TTS");
                let synthesizer = OpenAiSpeechSynthesizer::new(
                    key,
                    settings.base_url.clone(),
                    settings.model.clone(),
                    settings.voice.clone(),
                    timeout,
                )?;
                Ok(Arc::new(synthesizer))
            }
            SpeechProvider::Mock => {
                tracing::info!("Using mock speech synthesizer");
                Ok(Arc::new(MockSpeechSynthesizer))
            }
        }
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};

/// Speech from an OpenAI-compatible `/audio/speech` endpoint.
pub struct OpenAiSpeechSynthesizer {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    voice: String,
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'static str,
}

impl OpenAiSpeechSynthesizer {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        voice: String,
        timeout: Duration,
    ) -> Result<Self, SpeechSynthesisError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SpeechSynthesisError::Misconfigured(format!("client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
                .trim_end_matches('/')
                .to_string(),
            model,
            voice,
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechSynthesisError> {
        if text.trim().is_empty() {
            return Err(SpeechSynthesisError::EmptyText);
        }

        let url = format!("{}/audio/speech", self.base_url);
        let request_body = SpeechRequest {
            model: &self.model,
            input: text,
            voice: &self.voice,
            response_format: "mp3",
        };

        tracing::debug!(model = %self.model, voice = %self.voice, "Requesting OpenAI speech");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SpeechSynthesisError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechSynthesisError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechSynthesisError::InvalidResponse(e.to_string()))?;

        tracing::info!(bytes = audio.len(), "OpenAI speech synthesized");

        Ok(audio.to_vec())
    }
}

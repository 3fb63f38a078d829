use async_trait::async_trait;

/// Renders text as encoded audio bytes (MP3 for the network backends).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechSynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechSynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("nothing to synthesize")]
    EmptyText,
    #[error("synthesizer configuration invalid: {0}")]
    Misconfigured(String),
}

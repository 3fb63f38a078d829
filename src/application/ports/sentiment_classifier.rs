use async_trait::async_trait;

use crate::domain::SentimentPrediction;

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<SentimentPrediction, SentimentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
    #[error("invalid prediction: {0}")]
    InvalidPrediction(String),
}

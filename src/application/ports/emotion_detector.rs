use async_trait::async_trait;
use image::RgbImage;

use crate::domain::EmotionDistribution;

/// Detects faces in a frame and reports an emotion distribution per face,
/// in detection order. An empty vector means no face was found.
#[async_trait]
pub trait EmotionDetector: Send + Sync {
    async fn detect_emotions(
        &self,
        frame: &RgbImage,
    ) -> Result<Vec<EmotionDistribution>, EmotionDetectionError>;

    /// A disabled detector never sees frames, so callers can skip decoding them.
    fn is_enabled(&self) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EmotionDetectionError {
    #[error("frame encoding failed: {0}")]
    EncodingFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("detector configuration invalid: {0}")]
    Misconfigured(String),
}

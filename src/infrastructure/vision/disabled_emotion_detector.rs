use image::RgbImage;

use crate::application::ports::{EmotionDetectionError, EmotionDetector};
use crate::domain::EmotionDistribution;

/// Stands in when no detector is configured. Frames are never decoded for it.
pub struct DisabledEmotionDetector;

#[async_trait::async_trait]
impl EmotionDetector for DisabledEmotionDetector {
    async fn detect_emotions(
        &self,
        _frame: &RgbImage,
    ) -> Result<Vec<EmotionDistribution>, EmotionDetectionError> {
        Ok(Vec::new())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

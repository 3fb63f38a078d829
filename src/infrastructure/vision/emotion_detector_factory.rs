use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{EmotionDetectionError, EmotionDetector};
use crate::domain::{EmotionDistribution, EmotionLabel};
use crate::presentation::config::{EmotionProvider, EmotionSettings};

use super::{DisabledEmotionDetector, HttpEmotionDetector, MockEmotionDetector};

pub struct EmotionDetectorFactory;

impl EmotionDetectorFactory {
    pub fn create(
        settings: &EmotionSettings,
    ) -> Result<Arc<dyn EmotionDetector>, EmotionDetectionError> {
        match settings.provider {
            EmotionProvider::Http => {
                let url = settings
                    .url
                    .clone()
                    .filter(|u| !u.trim().is_empty())
                    .ok_or_else(|| {
                        EmotionDetectionError::Misconfigured(
                            "emotion.url is required for the http provider".to_string(),
                        )
                    })?;
                tracing::info!(url = %url, "Using remote emotion detector");
                let detector =
                    HttpEmotionDetector::new(url, Duration::from_secs(settings.timeout_secs))?;
                Ok(Arc::new(detector))
            }
            EmotionProvider::Mock => {
                tracing::info!("Using mock emotion detector");
                Ok(Arc::new(MockEmotionDetector::with_face(
                    EmotionDistribution::new()
                        .with(EmotionLabel::Neutral, 0.7)
                        .with(EmotionLabel::Happy, 0.3),
                )))
            }
            EmotionProvider::Disabled => {
                tracing::warn!("Emotion detection disabled; every emotion score will be 0.0");
                Ok(Arc::new(DisabledEmotionDetector))
            }
        }
    }
}

use image::RgbImage;

use crate::application::ports::{EmotionDetectionError, EmotionDetector};
use crate::domain::EmotionDistribution;

/// Reports a fixed set of faces for every frame. The default finds no face.
#[derive(Default)]
pub struct MockEmotionDetector {
    faces: Vec<EmotionDistribution>,
}

impl MockEmotionDetector {
    pub fn with_face(face: EmotionDistribution) -> Self {
        Self { faces: vec![face] }
    }
}

#[async_trait::async_trait]
impl EmotionDetector for MockEmotionDetector {
    async fn detect_emotions(
        &self,
        _frame: &RgbImage,
    ) -> Result<Vec<EmotionDistribution>, EmotionDetectionError> {
        Ok(self.faces.clone())
    }
}

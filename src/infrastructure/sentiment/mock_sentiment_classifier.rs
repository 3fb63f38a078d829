use crate::application::ports::{SentimentClassifier, SentimentError};
use crate::domain::{SentimentLabel, SentimentPrediction};

/// Returns the same prediction for every text.
pub struct MockSentimentClassifier {
    prediction: SentimentPrediction,
}

impl MockSentimentClassifier {
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self {
            prediction: SentimentPrediction::new(label, confidence),
        }
    }
}

impl Default for MockSentimentClassifier {
    fn default() -> Self {
        Self::new(SentimentLabel::Positive, 0.95)
    }
}

#[async_trait::async_trait]
impl SentimentClassifier for MockSentimentClassifier {
    async fn classify(&self, _text: &str) -> Result<SentimentPrediction, SentimentError> {
        Ok(self.prediction)
    }
}

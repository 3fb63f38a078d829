use std::sync::Arc;

use crate::application::ports::{SentimentClassifier, SentimentError};
use crate::presentation::config::{SentimentProvider, SentimentSettings};

use super::{LocalCandleSentimentClassifier, MockSentimentClassifier};

pub struct SentimentClassifierFactory;

impl SentimentClassifierFactory {
    pub fn create(
        settings: &SentimentSettings,
    ) -> Result<Arc<dyn SentimentClassifier>, SentimentError> {
        match settings.provider {
            SentimentProvider::Local => {
                tracing::info!(model = %settings.model, "Loading local sentiment model");
                let classifier = LocalCandleSentimentClassifier::new(&settings.model)?;
                Ok(Arc::new(classifier))
            }
            SentimentProvider::Mock => {
                tracing::info!("Using mock sentiment classifier");
                Ok(Arc::new(MockSentimentClassifier::default()))
            }
        }
    }
}

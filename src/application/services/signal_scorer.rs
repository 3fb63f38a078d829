use std::sync::Arc;

use crate::application::ports::{
    EmotionDetectionError, EmotionDetector, SentimentClassifier, SentimentError,
};
use crate::application::services::frame_decoder::decode_frame;
use crate::domain::{CompositeWeights, EmotionWeights, InterviewRules, LengthRule, SignalScores};

/// Turns one answer (and optional camera frame) into the three signal scores
/// and their weighted composite.
pub struct SignalScorer {
    sentiment_classifier: Arc<dyn SentimentClassifier>,
    emotion_detector: Arc<dyn EmotionDetector>,
    composite_weights: CompositeWeights,
    emotion_weights: EmotionWeights,
    length_rule: LengthRule,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnScore {
    pub signals: SignalScores,
    pub composite: f64,
}

impl SignalScorer {
    pub fn new(
        sentiment_classifier: Arc<dyn SentimentClassifier>,
        emotion_detector: Arc<dyn EmotionDetector>,
        rules: &InterviewRules,
    ) -> Self {
        Self {
            sentiment_classifier,
            emotion_detector,
            composite_weights: rules.composite_weights,
            emotion_weights: rules.emotion_weights,
            length_rule: rules.length_rule,
        }
    }

    /// Blank or whitespace-only answers score 0.0 without reaching the classifier.
    pub async fn sentiment_score(&self, text: &str) -> Result<f64, SentimentError> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }

        let prediction = self.sentiment_classifier.classify(text).await?;
        if !prediction.confidence.is_finite() {
            return Err(SentimentError::InvalidPrediction(format!(
                "confidence {} is not finite",
                prediction.confidence
            )));
        }

        tracing::debug!(
            label = %prediction.label,
            confidence = prediction.confidence,
            "Sentiment classified"
        );

        Ok(prediction.signed_score())
    }

    /// Scores the first detected face. Missing, undecodable and faceless frames score 0.0,
    /// as does any frame when the detector is disabled.
    pub async fn emotion_score(&self, image: Option<&str>) -> Result<f64, EmotionDetectionError> {
        if !self.emotion_detector.is_enabled() {
            if image.is_some() {
                tracing::debug!("Emotion detection disabled; frame ignored");
            }
            return Ok(0.0);
        }

        let Some(frame) = image.and_then(decode_frame) else {
            return Ok(0.0);
        };

        let faces = self.emotion_detector.detect_emotions(&frame).await?;
        let Some(face) = faces.first() else {
            tracing::debug!("No face detected in frame");
            return Ok(0.0);
        };

        tracing::debug!(
            faces = faces.len(),
            dominant = ?face.dominant(),
            "Facial emotions detected"
        );

        Ok(self.emotion_weights.weighted_sum(face))
    }

    pub fn length_score(&self, answer: &str) -> f64 {
        self.length_rule.score(answer)
    }

    pub async fn score_turn(
        &self,
        answer: &str,
        image: Option<&str>,
    ) -> Result<TurnScore, ScoringError> {
        let (sentiment, emotion) =
            tokio::join!(self.sentiment_score(answer), self.emotion_score(image));

        let signals = SignalScores {
            sentiment: sentiment?,
            emotion: emotion?,
            length: self.length_score(answer),
        };

        Ok(TurnScore {
            signals,
            composite: signals.composite(&self.composite_weights),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("sentiment: {0}")]
    Sentiment(#[from] SentimentError),
    #[error("emotion: {0}")]
    Emotion(#[from] EmotionDetectionError),
}

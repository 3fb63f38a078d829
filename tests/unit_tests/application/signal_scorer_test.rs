use std::sync::Arc;
use std::sync::atomic::Ordering;

use interviewer::application::ports::{EmotionDetector, SentimentClassifier};
use interviewer::application::services::{ScoringError, SignalScorer};
use interviewer::domain::{EmotionDistribution, EmotionLabel, InterviewRules, SentimentLabel};

use crate::support::{
    FailingSentimentClassifier, FixedEmotionDetector, FixedSentimentClassifier, LONG_ANSWER,
    approx_eq, png_base64,
};

fn scorer(
    sentiment: Arc<dyn SentimentClassifier>,
    emotion: Arc<dyn EmotionDetector>,
) -> SignalScorer {
    SignalScorer::new(sentiment, emotion, &InterviewRules::default())
}

#[tokio::test]
async fn given_blank_answer_when_scoring_sentiment_then_classifier_is_skipped() {
    let sentiment = Arc::new(FixedSentimentClassifier::new(SentimentLabel::Positive, 0.99));
    let scorer = scorer(sentiment.clone(), Arc::new(FixedEmotionDetector::no_face()));

    let score = scorer.sentiment_score("   ").await.unwrap();

    assert_eq!(score, 0.0);
    assert_eq!(sentiment.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_negative_answer_when_scoring_sentiment_then_score_is_negative() {
    let scorer = scorer(
        Arc::new(FixedSentimentClassifier::new(SentimentLabel::Negative, 0.7)),
        Arc::new(FixedEmotionDetector::no_face()),
    );

    let score = scorer.sentiment_score("I hated that job").await.unwrap();

    assert!(approx_eq(score, -0.7));
}

#[tokio::test]
async fn given_non_finite_confidence_when_scoring_sentiment_then_error() {
    let scorer = scorer(
        Arc::new(FixedSentimentClassifier::new(SentimentLabel::Positive, f64::NAN)),
        Arc::new(FixedEmotionDetector::no_face()),
    );

    assert!(scorer.sentiment_score("fine").await.is_err());
}

#[tokio::test]
async fn given_no_image_when_scoring_emotion_then_detector_is_skipped() {
    let emotion = Arc::new(FixedEmotionDetector::new(vec![
        EmotionDistribution::new().with(EmotionLabel::Happy, 1.0),
    ]));
    let scorer = scorer(
        Arc::new(FixedSentimentClassifier::new(SentimentLabel::Positive, 0.9)),
        emotion.clone(),
    );

    assert_eq!(scorer.emotion_score(None).await.unwrap(), 0.0);
    assert_eq!(emotion.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_garbage_image_when_scoring_emotion_then_zero() {
    let emotion = Arc::new(FixedEmotionDetector::new(vec![
        EmotionDistribution::new().with(EmotionLabel::Sad, 1.0),
    ]));
    let scorer = scorer(
        Arc::new(FixedSentimentClassifier::new(SentimentLabel::Positive, 0.9)),
        emotion.clone(),
    );

    assert_eq!(scorer.emotion_score(Some("@@garbage@@")).await.unwrap(), 0.0);
    assert_eq!(emotion.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_disabled_detector_when_scoring_emotion_then_frame_is_not_inspected() {
    let emotion = Arc::new(FixedEmotionDetector::disabled(vec![
        EmotionDistribution::new().with(EmotionLabel::Happy, 1.0),
    ]));
    let scorer = scorer(
        Arc::new(FixedSentimentClassifier::new(SentimentLabel::Positive, 0.9)),
        emotion.clone(),
    );

    let score = scorer.emotion_score(Some(&png_base64(4, 4))).await.unwrap();

    assert_eq!(score, 0.0);
    assert_eq!(emotion.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_frame_without_face_when_scoring_emotion_then_zero() {
    let emotion = Arc::new(FixedEmotionDetector::no_face());
    let scorer = scorer(
        Arc::new(FixedSentimentClassifier::new(SentimentLabel::Positive, 0.9)),
        emotion.clone(),
    );

    let score = scorer.emotion_score(Some(&png_base64(4, 4))).await.unwrap();

    assert_eq!(score, 0.0);
    assert_eq!(emotion.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_several_faces_when_scoring_emotion_then_first_face_wins() {
    let scorer = scorer(
        Arc::new(FixedSentimentClassifier::new(SentimentLabel::Positive, 0.9)),
        Arc::new(FixedEmotionDetector::new(vec![
            EmotionDistribution::new()
                .with(EmotionLabel::Happy, 0.6)
                .with(EmotionLabel::Neutral, 0.4),
            EmotionDistribution::new().with(EmotionLabel::Angry, 1.0),
        ])),
    );
    let frame = format!("data:image/png;base64,{}", png_base64(4, 4));

    let score = scorer.emotion_score(Some(&frame)).await.unwrap();

    assert!(approx_eq(score, 0.6));
}

#[tokio::test]
async fn given_long_positive_answer_without_frame_when_scoring_turn_then_composite_matches() {
    let scorer = scorer(
        Arc::new(FixedSentimentClassifier::new(SentimentLabel::Positive, 0.95)),
        Arc::new(FixedEmotionDetector::no_face()),
    );

    let score = scorer.score_turn(LONG_ANSWER, None).await.unwrap();

    assert!(approx_eq(score.signals.sentiment, 0.95));
    assert_eq!(score.signals.emotion, 0.0);
    assert_eq!(score.signals.length, 0.5);
    assert!(approx_eq(score.composite, 0.48));
}

#[tokio::test]
async fn given_short_answer_with_happy_face_when_scoring_turn_then_all_signals_count() {
    let scorer = scorer(
        Arc::new(FixedSentimentClassifier::new(SentimentLabel::Positive, 1.0)),
        Arc::new(FixedEmotionDetector::new(vec![
            EmotionDistribution::new().with(EmotionLabel::Happy, 1.0),
        ])),
    );

    let score = scorer
        .score_turn("Short and happy", Some(&png_base64(8, 8)))
        .await
        .unwrap();

    assert_eq!(score.signals.length, -0.2);
    assert!(approx_eq(score.composite, 0.4 + 0.4 - 0.04));
}

#[tokio::test]
async fn given_failing_classifier_when_scoring_turn_then_sentiment_error() {
    let scorer = scorer(
        Arc::new(FailingSentimentClassifier),
        Arc::new(FixedEmotionDetector::no_face()),
    );

    let err = scorer.score_turn(LONG_ANSWER, None).await.unwrap_err();

    assert!(matches!(err, ScoringError::Sentiment(_)));
}

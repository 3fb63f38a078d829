use interviewer::application::ports::{
    EmotionDetectionError, EmotionDetector, QuestionGenerationError, QuestionGenerator,
    SentimentClassifier, SpeechSynthesisError, SpeechSynthesizer,
};
use interviewer::domain::SentimentLabel;
use interviewer::infrastructure::audio::SpeechSynthesizerFactory;
use interviewer::infrastructure::llm::QuestionGeneratorFactory;
use interviewer::infrastructure::sentiment::SentimentClassifierFactory;
use interviewer::infrastructure::vision::EmotionDetectorFactory;
use interviewer::presentation::config::{
    EmotionProvider, EmotionSettings, LlmProvider, LlmSettings, SentimentProvider,
    SentimentSettings, SpeechProvider, SpeechSettings,
};

use crate::support::approx_eq;

#[tokio::test]
async fn given_mock_sentiment_provider_when_created_then_positive_prediction() {
    let settings = SentimentSettings {
        provider: SentimentProvider::Mock,
        ..SentimentSettings::default()
    };

    let classifier = SentimentClassifierFactory::create(&settings).unwrap();
    let prediction = classifier.classify("anything").await.unwrap();

    assert_eq!(prediction.label, SentimentLabel::Positive);
    assert!(approx_eq(prediction.confidence, 0.95));
}

#[tokio::test]
async fn given_mock_emotion_provider_when_created_then_one_face_is_reported() {
    let settings = EmotionSettings {
        provider: EmotionProvider::Mock,
        ..EmotionSettings::default()
    };
    let frame = image::RgbImage::new(2, 2);

    let detector = EmotionDetectorFactory::create(&settings).unwrap();
    let faces = detector.detect_emotions(&frame).await.unwrap();

    assert_eq!(faces.len(), 1);
    assert!(detector.is_enabled());
}

#[tokio::test]
async fn given_disabled_emotion_provider_when_created_then_no_face_is_reported() {
    let detector = EmotionDetectorFactory::create(&EmotionSettings::default()).unwrap();
    let frame = image::RgbImage::new(2, 2);

    assert!(!detector.is_enabled());
    assert!(detector.detect_emotions(&frame).await.unwrap().is_empty());
}

#[test]
fn given_http_emotion_provider_without_url_when_created_then_misconfigured() {
    let settings = EmotionSettings {
        provider: EmotionProvider::Http,
        url: Some("  ".to_string()),
        ..EmotionSettings::default()
    };

    let err = EmotionDetectorFactory::create(&settings).err().unwrap();

    assert!(matches!(err, EmotionDetectionError::Misconfigured(_)));
}

#[test]
fn given_http_emotion_provider_with_url_when_created_then_ok() {
    let settings = EmotionSettings {
        provider: EmotionProvider::Http,
        url: Some("http://localhost:8001".to_string()),
        ..EmotionSettings::default()
    };

    assert!(EmotionDetectorFactory::create(&settings).is_ok());
}

#[tokio::test]
async fn given_mock_llm_provider_when_created_then_generator_asks_canned_question() {
    let settings = LlmSettings {
        provider: LlmProvider::Mock,
        ..LlmSettings::default()
    };

    let generator = QuestionGeneratorFactory::create(&settings).unwrap();
    let question = generator.next_question("Q", "A").await.unwrap();

    assert!(question.ends_with('?'));
}

#[test]
fn given_openai_llm_provider_with_blank_url_when_created_then_misconfigured() {
    let settings = LlmSettings {
        base_url: " ".to_string(),
        ..LlmSettings::default()
    };

    let err = QuestionGeneratorFactory::create(&settings).err().unwrap();

    assert!(matches!(err, QuestionGenerationError::Misconfigured(_)));
}

#[test]
fn given_openai_llm_provider_without_key_when_created_then_ok() {
    // Keyless endpoints (local OpenAI-compatible servers) are allowed.
    assert!(QuestionGeneratorFactory::create(&LlmSettings::default()).is_ok());
}

#[tokio::test]
async fn given_mock_speech_provider_when_created_then_text_is_echoed() {
    let settings = SpeechSettings {
        provider: SpeechProvider::Mock,
        ..SpeechSettings::default()
    };

    let synthesizer = SpeechSynthesizerFactory::create(&settings).unwrap();
    let audio = synthesizer.synthesize("Hello").await.unwrap();

    assert_eq!(audio, b"Hello".to_vec());
}

#[test]
fn given_openai_speech_provider_without_key_when_created_then_misconfigured() {
    let settings = SpeechSettings {
        provider: SpeechProvider::OpenAi,
        ..SpeechSettings::default()
    };

    let err = SpeechSynthesizerFactory::create(&settings).err().unwrap();

    assert!(matches!(err, SpeechSynthesisError::Misconfigured(_)));
}

#[test]
fn given_google_speech_provider_when_created_then_ok() {
    assert!(SpeechSynthesizerFactory::create(&SpeechSettings::default()).is_ok());
}

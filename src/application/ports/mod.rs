mod emotion_detector;
mod llm_client;
mod question_generator;
mod repository_error;
mod sentiment_classifier;
mod session_store;
mod speech_synthesizer;

pub use emotion_detector::{EmotionDetectionError, EmotionDetector};
pub use llm_client::{LlmClient, LlmClientError};
pub use question_generator::{QuestionGenerationError, QuestionGenerator};
pub use repository_error::RepositoryError;
pub use sentiment_classifier::{SentimentClassifier, SentimentError};
pub use session_store::{SessionHandle, SessionStore};
pub use speech_synthesizer::{SpeechSynthesisError, SpeechSynthesizer};

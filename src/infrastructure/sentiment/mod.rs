mod local_candle_sentiment_classifier;
mod mock_sentiment_classifier;
mod sentiment_classifier_factory;

pub use local_candle_sentiment_classifier::LocalCandleSentimentClassifier;
pub use mock_sentiment_classifier::MockSentimentClassifier;
pub use sentiment_classifier_factory::SentimentClassifierFactory;

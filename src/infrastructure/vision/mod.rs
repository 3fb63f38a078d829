mod disabled_emotion_detector;
mod emotion_detector_factory;
mod http_emotion_detector;
mod mock_emotion_detector;

pub use disabled_emotion_detector::DisabledEmotionDetector;
pub use emotion_detector_factory::EmotionDetectorFactory;
pub use http_emotion_detector::HttpEmotionDetector;
pub use mock_emotion_detector::MockEmotionDetector;

mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    EmotionProvider, EmotionSettings, InterviewSettings, LlmProvider, LlmSettings,
    LoggingSettings, SentimentProvider, SentimentSettings, ServerSettings, SessionSettings,
    Settings, SettingsError, SpeechProvider, SpeechSettings,
};

use config::{Config, File};
use serde::Deserialize;

use crate::domain::{
    CompositeWeights, DEFAULT_MAX_TURNS, InterviewRules, LengthRule, PerformanceThresholds,
};

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub interview: InterviewSettings,
    pub sentiment: SentimentSettings,
    pub emotion: EmotionSettings,
    pub llm: LlmSettings,
    pub speech: SpeechSettings,
    pub session: SessionSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Settings {
    /// Layers `appsettings.<environment>.toml` (optional) under `APP_`-prefixed
    /// environment variables, e.g. `APP_SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let file_name = format!("appsettings.{}", environment.as_str().to_lowercase());

        let configuration = Config::builder()
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.interview.max_turns == 0 {
            return Err(SettingsError::Invalid(
                "interview.max_turns must be at least 1".to_string(),
            ));
        }
        if self.interview.excellent_above < self.interview.good_above {
            return Err(SettingsError::Invalid(format!(
                "interview.excellent_above ({}) must not be below interview.good_above ({})",
                self.interview.excellent_above, self.interview.good_above
            )));
        }
        if self.session.max_sessions == 0 {
            return Err(SettingsError::Invalid(
                "session.max_sessions must be at least 1".to_string(),
            ));
        }
        if self.emotion.provider == EmotionProvider::Http && self.emotion.url.is_none() {
            return Err(SettingsError::Invalid(
                "emotion.url is required for the http emotion provider".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,interviewer=debug,tower_http=debug".to_string(),
            enable_json: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InterviewSettings {
    pub max_turns: u32,
    pub min_words: usize,
    pub sentiment_weight: f64,
    pub emotion_weight: f64,
    pub length_weight: f64,
    pub excellent_above: f64,
    pub good_above: f64,
}

impl InterviewSettings {
    pub fn rules(&self) -> InterviewRules {
        InterviewRules {
            max_turns: self.max_turns,
            composite_weights: CompositeWeights {
                sentiment: self.sentiment_weight,
                emotion: self.emotion_weight,
                length: self.length_weight,
            },
            length_rule: LengthRule {
                min_words: self.min_words,
                ..LengthRule::default()
            },
            performance_thresholds: PerformanceThresholds {
                excellent_above: self.excellent_above,
                good_above: self.good_above,
            },
            ..InterviewRules::default()
        }
    }
}

impl Default for InterviewSettings {
    fn default() -> Self {
        let weights = CompositeWeights::default();
        let thresholds = PerformanceThresholds::default();
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            min_words: LengthRule::default().min_words,
            sentiment_weight: weights.sentiment,
            emotion_weight: weights.emotion,
            length_weight: weights.length,
            excellent_above: thresholds.excellent_above,
            good_above: thresholds.good_above,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentProvider {
    Local,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SentimentSettings {
    pub provider: SentimentProvider,
    pub model: String,
}

impl Default for SentimentSettings {
    fn default() -> Self {
        Self {
            provider: SentimentProvider::Local,
            model: "distilbert-base-uncased-finetuned-sst-2-english".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionProvider {
    Http,
    Mock,
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmotionSettings {
    pub provider: EmotionProvider,
    pub url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for EmotionSettings {
    fn default() -> Self {
        Self {
            provider: EmotionProvider::Disabled,
            url: None,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: Option<String>,
    pub base_url: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenAi,
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            max_tokens: 40,
            temperature: 0.0,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechProvider {
    Google,
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub provider: SpeechProvider,
    pub language: String,
    pub voice: String,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            provider: SpeechProvider::Google,
            language: "en".to_string(),
            voice: "alloy".to_string(),
            model: "tts-1".to_string(),
            api_key: None,
            base_url: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub idle_timeout_secs: u64,
    pub sweep_interval_secs: u64,
    pub max_sessions: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 3600,
            sweep_interval_secs: 300,
            max_sessions: 10_000,
        }
    }
}

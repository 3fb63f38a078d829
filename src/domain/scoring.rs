//! Turn scoring: the three signal values and the linear pool that combines them.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
        }
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "POSITIVE" | "POS" | "LABEL_1" => Ok(SentimentLabel::Positive),
            "NEGATIVE" | "NEG" | "LABEL_0" => Ok(SentimentLabel::Negative),
            other => Err(format!("Unknown sentiment label: {}", other)),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of a sentiment classifier: the winning label and its confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentPrediction {
    pub label: SentimentLabel,
    pub confidence: f64,
}

impl SentimentPrediction {
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }

    /// Signed confidence in `[-1, 1]`.
    pub fn signed_score(&self) -> f64 {
        let magnitude = self.confidence.clamp(0.0, 1.0);
        match self.label {
            SentimentLabel::Positive => magnitude,
            SentimentLabel::Negative => -magnitude,
        }
    }
}

/// Step function rewarding answers of at least `min_words` words.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthRule {
    pub min_words: usize,
    pub reward: f64,
    pub penalty: f64,
}

impl LengthRule {
    pub fn score(&self, answer: &str) -> f64 {
        if word_count(answer) >= self.min_words {
            self.reward
        } else {
            self.penalty
        }
    }
}

impl Default for LengthRule {
    fn default() -> Self {
        Self {
            min_words: 15,
            reward: 0.5,
            penalty: -0.2,
        }
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeWeights {
    pub sentiment: f64,
    pub emotion: f64,
    pub length: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            sentiment: 0.4,
            emotion: 0.4,
            length: 0.2,
        }
    }
}

/// The three per-turn signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalScores {
    pub sentiment: f64,
    pub emotion: f64,
    pub length: f64,
}

impl SignalScores {
    pub fn composite(&self, weights: &CompositeWeights) -> f64 {
        weights.sentiment * self.sentiment
            + weights.emotion * self.emotion
            + weights.length * self.length
    }
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

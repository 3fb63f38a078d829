use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Facial emotion labels reported by the emotion detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionLabel {
    Angry,
    Sad,
    Disgust,
    Fear,
    Neutral,
    Surprise,
    Happy,
}

impl EmotionLabel {
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Angry,
        EmotionLabel::Sad,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Neutral,
        EmotionLabel::Surprise,
        EmotionLabel::Happy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Angry => "angry",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Surprise => "surprise",
            EmotionLabel::Happy => "happy",
        }
    }
}

impl FromStr for EmotionLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "angry" => Ok(EmotionLabel::Angry),
            "sad" => Ok(EmotionLabel::Sad),
            "disgust" => Ok(EmotionLabel::Disgust),
            "fear" => Ok(EmotionLabel::Fear),
            "neutral" => Ok(EmotionLabel::Neutral),
            "surprise" => Ok(EmotionLabel::Surprise),
            "happy" => Ok(EmotionLabel::Happy),
            other => Err(format!("Unknown emotion label: {}", other)),
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-face probabilities over [`EmotionLabel`]. Labels the detector did not
/// report count as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionDistribution {
    probabilities: HashMap<EmotionLabel, f64>,
}

impl EmotionDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: EmotionLabel, probability: f64) -> Self {
        self.set(label, probability);
        self
    }

    pub fn set(&mut self, label: EmotionLabel, probability: f64) {
        self.probabilities.insert(label, probability);
    }

    pub fn probability(&self, label: EmotionLabel) -> f64 {
        self.probabilities.get(&label).copied().unwrap_or(0.0)
    }

    /// The most probable label, if any probability was reported.
    pub fn dominant(&self) -> Option<EmotionLabel> {
        self.probabilities
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(label, _)| *label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f64)> + '_ {
        self.probabilities.iter().map(|(label, p)| (*label, *p))
    }
}

impl FromIterator<(EmotionLabel, f64)> for EmotionDistribution {
    fn from_iter<I: IntoIterator<Item = (EmotionLabel, f64)>>(iter: I) -> Self {
        Self {
            probabilities: iter.into_iter().collect(),
        }
    }
}

/// Valence assigned to each emotion when folding a distribution into one score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionWeights {
    pub angry: f64,
    pub sad: f64,
    pub disgust: f64,
    pub fear: f64,
    pub neutral: f64,
    pub surprise: f64,
    pub happy: f64,
}

impl EmotionWeights {
    pub fn weight(&self, label: EmotionLabel) -> f64 {
        match label {
            EmotionLabel::Angry => self.angry,
            EmotionLabel::Sad => self.sad,
            EmotionLabel::Disgust => self.disgust,
            EmotionLabel::Fear => self.fear,
            EmotionLabel::Neutral => self.neutral,
            EmotionLabel::Surprise => self.surprise,
            EmotionLabel::Happy => self.happy,
        }
    }

    pub fn weighted_sum(&self, distribution: &EmotionDistribution) -> f64 {
        distribution
            .iter()
            .map(|(label, probability)| self.weight(label) * probability)
            .sum()
    }
}

impl Default for EmotionWeights {
    fn default() -> Self {
        Self {
            angry: -0.9,
            sad: -0.9,
            disgust: -0.8,
            fear: -0.7,
            neutral: 0.0,
            surprise: 0.2,
            happy: 1.0,
        }
    }
}

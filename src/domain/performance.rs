use std::fmt;

use serde::Serialize;

/// Final classification of an interview from its average turn score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Performance {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Performance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent",
            Performance::Good => "Good",
            Performance::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Both bounds are strict: an average equal to a bound falls into the lower band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceThresholds {
    pub excellent_above: f64,
    pub good_above: f64,
}

impl PerformanceThresholds {
    pub fn classify(&self, average: f64) -> Performance {
        if average > self.excellent_above {
            Performance::Excellent
        } else if average > self.good_above {
            Performance::Good
        } else {
            Performance::NeedsImprovement
        }
    }
}

impl Default for PerformanceThresholds {
    fn default() -> Self {
        Self {
            excellent_above: 0.4,
            good_above: 0.0,
        }
    }
}

//! Sentiment readings and the keyword-based scorer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Polarity;

const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "excellent",
    "great",
    "positive",
    "success",
    "achieve",
    "complete",
    "satisfied",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad", "poor", "terrible", "negative", "fail", "problem", "issue", "delay", "risk", "concern",
];

/// Scores within this distance of zero read as neutral.
pub const NEUTRAL_BAND: f64 = 0.1;

/// Direction of a sentiment reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Lowercase label used in narratives.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    /// Maps a classifier label to a direction.
    ///
    /// Covers the spellings common sentiment checkpoints emit; anything
    /// unrecognized is treated as neutral.
    pub fn from_model_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" | "label_2" => SentimentLabel::Positive,
            "negative" | "neg" | "label_0" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of either sentiment strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentReading {
    pub score: Polarity,
    pub label: SentimentLabel,
}

impl SentimentReading {
    /// Builds a reading from a signed score, deriving the label from the
    /// neutral band.
    pub fn from_score(score: f64) -> Self {
        let score = Polarity::new(score);
        let label = if score.value() > NEUTRAL_BAND {
            SentimentLabel::Positive
        } else if score.value() < -NEUTRAL_BAND {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        Self { score, label }
    }

    /// Builds a reading from a classifier's top label and its confidence.
    ///
    /// Positive labels map to `+confidence`, negative to `-confidence`,
    /// neutral to zero.
    pub fn from_classifier(label: &str, confidence: f64) -> Self {
        let label = SentimentLabel::from_model_label(label);
        let confidence = confidence.clamp(0.0, 1.0);
        let score = match label {
            SentimentLabel::Positive => confidence,
            SentimentLabel::Negative => -confidence,
            SentimentLabel::Neutral => 0.0,
        };
        Self {
            score: Polarity::new(score),
            label,
        }
    }

    pub fn neutral() -> Self {
        Self {
            score: Polarity::NEUTRAL,
            label: SentimentLabel::Neutral,
        }
    }
}

/// Keyword sentiment: `(pos - neg) / (pos + neg)`, or zero when nothing matched.
///
/// Each keyword counts at most once and matches as a substring of the
/// lower-cased text, so "delays" counts as "delay".
pub fn keyword_sentiment(text: &str) -> SentimentReading {
    let lower = text.to_lowercase();
    let positive = POSITIVE_KEYWORDS.iter().filter(|w| lower.contains(*w)).count();
    let negative = NEGATIVE_KEYWORDS.iter().filter(|w| lower.contains(*w)).count();

    if positive + negative == 0 {
        return SentimentReading::neutral();
    }

    let score = (positive as f64 - negative as f64) / (positive + negative) as f64;
    SentimentReading::from_score(score)
}

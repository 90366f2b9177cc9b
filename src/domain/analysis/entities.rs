//! Named entities: the shared shape, regex extraction, and the simple
//! aggregation used to group token-level model predictions into spans.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::UnitScore;

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b").expect("valid date regex"));

static MONEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\$[\d,]+(?:\.\d{2})?|\b\d+(?:,\d{3})*(?:\.\d{2})?\s*(?:dollars?|USD|INR|rupees?)\b",
    )
    .expect("valid money regex")
});

static PERCENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:\.\d+)?%").expect("valid percent regex"));

const DATE_CONFIDENCE: f64 = 0.9;
const MONEY_CONFIDENCE: f64 = 0.85;
const PERCENT_CONFIDENCE: f64 = 0.9;

/// Entity category. Model labels outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    Date,
    Money,
    Percent,
    Person,
    Organization,
    Location,
    Misc,
    Other(String),
}

impl EntityLabel {
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Date => "DATE",
            EntityLabel::Money => "MONEY",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Person => "PER",
            EntityLabel::Organization => "ORG",
            EntityLabel::Location => "LOC",
            EntityLabel::Misc => "MISC",
            EntityLabel::Other(label) => label,
        }
    }
}

impl From<String> for EntityLabel {
    fn from(label: String) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "DATE" => EntityLabel::Date,
            "MONEY" => EntityLabel::Money,
            "PERCENT" => EntityLabel::Percent,
            "PER" | "PERSON" => EntityLabel::Person,
            "ORG" | "ORGANIZATION" => EntityLabel::Organization,
            "LOC" | "LOCATION" => EntityLabel::Location,
            "MISC" => EntityLabel::Misc,
            _ => EntityLabel::Other(label),
        }
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity found in report text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub confidence: UnitScore,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel, confidence: f64) -> Self {
        Self {
            text: text.into(),
            label,
            confidence: UnitScore::new(confidence),
        }
    }
}

/// Regex entity extraction: all dates, then all money amounts, then all
/// percentages, each in text order.
pub fn extract_basic_entities(text: &str) -> Vec<Entity> {
    let patterns: [(&Regex, EntityLabel, f64); 3] = [
        (&DATE_PATTERN, EntityLabel::Date, DATE_CONFIDENCE),
        (&MONEY_PATTERN, EntityLabel::Money, MONEY_CONFIDENCE),
        (&PERCENT_PATTERN, EntityLabel::Percent, PERCENT_CONFIDENCE),
    ];

    patterns
        .iter()
        .flat_map(|(pattern, label, confidence)| {
            pattern
                .find_iter(text)
                .map(move |m| Entity::new(m.as_str(), label.clone(), *confidence))
        })
        .collect()
}

/// One token-level prediction from a token-classification model.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPrediction {
    pub word: String,
    /// Raw tag such as `B-PER`, `I-ORG` or `O`.
    pub tag: String,
    pub score: f64,
}

impl TokenPrediction {
    pub fn new(word: impl Into<String>, tag: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
            score,
        }
    }

    /// Splits the tag into its begin marker and entity type.
    fn split_tag(&self) -> (bool, &str) {
        if let Some(kind) = self.tag.strip_prefix("B-") {
            (true, kind)
        } else if let Some(kind) = self.tag.strip_prefix("I-") {
            (false, kind)
        } else {
            (false, self.tag.as_str())
        }
    }
}

/// Simple aggregation: contiguous tokens of the same entity type merge into
/// one span.
///
/// A `B-` tag opens a new span unless the token is a `##` word piece, `O`
/// tokens close the current span and are dropped, word pieces are glued
/// without a space, and a span's confidence is the mean of its token scores.
pub fn aggregate_simple(tokens: &[TokenPrediction]) -> Vec<Entity> {
    struct Span {
        kind: String,
        text: String,
        scores: Vec<f64>,
    }

    fn close(span: Span) -> Entity {
        let mean = span.scores.iter().sum::<f64>() / span.scores.len().max(1) as f64;
        Entity::new(span.text, EntityLabel::from(span.kind), mean)
    }

    let mut entities = Vec::new();
    let mut current: Option<Span> = None;

    for token in tokens {
        let (begins, kind) = token.split_tag();
        if kind.is_empty() || kind == "O" {
            if let Some(span) = current.take() {
                entities.push(close(span));
            }
            continue;
        }

        let piece = token.word.strip_prefix("##");
        let continues = match &current {
            Some(span) => span.kind == kind && (!begins || piece.is_some()),
            None => false,
        };

        if continues {
            if let Some(span) = current.as_mut() {
                match piece {
                    Some(rest) => span.text.push_str(rest),
                    None => {
                        span.text.push(' ');
                        span.text.push_str(&token.word);
                    }
                }
                span.scores.push(token.score);
            }
        } else {
            if let Some(span) = current.take() {
                entities.push(close(span));
            }
            current = Some(Span {
                kind: kind.to_string(),
                text: piece.unwrap_or(&token.word).to_string(),
                scores: vec![token.score],
            });
        }
    }

    if let Some(span) = current.take() {
        entities.push(close(span));
    }

    entities
}

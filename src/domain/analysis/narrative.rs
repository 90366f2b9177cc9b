//! Narrative assembly - the human-readable summary and risk factor list.

use super::language::DEFAULT_LANGUAGE;
use super::risk::RiskLevel;
use super::{FeatureVector, IssueType, SentimentReading};
use crate::domain::foundation::UnitScore;

/// Qualitative band for the completeness score.
pub fn completeness_label(completeness: UnitScore) -> &'static str {
    let value = completeness.value();
    if value > 0.7 {
        "good"
    } else if value > 0.5 {
        "moderate"
    } else {
        "limited"
    }
}

/// Inputs to the narrative, all already computed.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeInputs<'a> {
    pub issue: &'a IssueType,
    pub sentiment: &'a SentimentReading,
    pub completeness: UnitScore,
    pub risk: UnitScore,
    pub entity_count: usize,
    pub language: &'a str,
}

/// Builds the analysis paragraph.
pub fn compose_narrative(inputs: &NarrativeInputs<'_>) -> String {
    let mut parts = vec![
        format!(
            "AI analysis of {} reveals {} sentiment (score: {:.2}).",
            inputs.issue,
            inputs.sentiment.label,
            inputs.sentiment.score.value()
        ),
        format!(
            "Text completeness is {}.",
            completeness_label(inputs.completeness)
        ),
        format!(
            "Risk assessment indicates {} risk level (score: {:.2}).",
            RiskLevel::from_score(inputs.risk),
            inputs.risk.value()
        ),
        format!("Extracted {} key entities from the text.", inputs.entity_count),
    ];

    if inputs.language != DEFAULT_LANGUAGE {
        parts.push(format!(
            "Content detected in {} language, processed using multilingual models.",
            inputs.language
        ));
    }

    parts.join(" ")
}

/// Ordered risk factors for the result.
pub fn risk_factors(inputs: &NarrativeInputs<'_>, features: &FeatureVector) -> Vec<String> {
    vec![
        format!("Issue type: {}", inputs.issue),
        format!("Risk level: {}", RiskLevel::from_score(inputs.risk)),
        format!("Sentiment: {}", inputs.sentiment.label),
        format!(
            "Text completeness: {:.1}%",
            inputs.completeness.value() * 100.0
        ),
        format!("Project scale: {}", format_currency(features.budget_size)),
        format!("Timeline: {} days", format_quantity(features.timeline_days)),
        format!(
            "Complexity level: {}/10",
            format_quantity(features.complexity_score)
        ),
    ]
}

/// Dollar amount rounded to whole units with thousands separators: `$1,250,000`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}", sign, grouped)
}

/// Whole numbers print without a fraction, others as-is.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

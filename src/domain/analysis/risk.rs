//! Risk Calculator - heuristic risk scoring and the issue-type adjustment
//! applied to classifier output.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{FeatureVector, IssueType};
use crate::domain::foundation::UnitScore;

/// Starting risk before the issue weight and bumps are added.
pub const HEURISTIC_BASE_RISK: f64 = 0.3;

/// Budgets above this count as large-scale projects.
pub const LARGE_BUDGET_THRESHOLD: f64 = 1_000_000.0;

/// Timelines shorter than this count as compressed.
pub const SHORT_TIMELINE_DAYS: f64 = 30.0;

/// Complexity above this counts as high.
pub const HIGH_COMPLEXITY_THRESHOLD: f64 = 7.0;

/// Reports mentioning more technical terms than this are treated as
/// describing a risky situation.
pub const TECHNICAL_TERM_THRESHOLD: f64 = 5.0;

/// Number of inputs the logistic risk model expects.
pub const MODEL_INPUT_DIMENSION: usize = 5;

/// Coarse band a risk score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// High above 0.7, moderate above 0.4, low otherwise.
    pub fn from_score(score: UnitScore) -> Self {
        let value = score.value();
        if value > 0.7 {
            RiskLevel::High
        } else if value > 0.4 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calculator for project risk scores.
pub struct RiskCalculator;

impl RiskCalculator {
    /// Heuristic risk: base plus issue weight plus threshold bumps, capped at 1.
    pub fn heuristic(features: &FeatureVector, issue: &IssueType) -> UnitScore {
        let mut risk = HEURISTIC_BASE_RISK + issue.heuristic_weight();

        if features.budget_size > LARGE_BUDGET_THRESHOLD {
            risk += 0.1;
        }
        if features.timeline_days < SHORT_TIMELINE_DAYS {
            risk += 0.15;
        }
        if features.complexity_score > HIGH_COMPLEXITY_THRESHOLD {
            risk += 0.1;
        }
        if features.technical_terms > TECHNICAL_TERM_THRESHOLD {
            risk += 0.05;
        }

        UnitScore::new(risk.min(1.0))
    }

    /// Scales a classifier's base probability by the issue multiplier, capped at 1.
    pub fn apply_issue_multiplier(base_probability: f64, issue: &IssueType) -> UnitScore {
        UnitScore::new((base_probability * issue.model_multiplier()).min(1.0))
    }

    /// Unscaled inputs for the logistic model:
    /// `[word_count, sentence_count, technical_terms, budget / 100000, timeline_days / 365]`.
    pub fn model_inputs(features: &FeatureVector) -> [f64; MODEL_INPUT_DIMENSION] {
        [
            features.word_count,
            features.sentence_count,
            features.technical_terms,
            features.budget_size / 100_000.0,
            features.timeline_days / 365.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{extract_features, ProjectMetadata};

    fn features(meta: ProjectMetadata) -> FeatureVector {
        extract_features("Status update for the week.", &meta)
    }

    #[test]
    fn default_project_scores_base_plus_weight() {
        let f = features(ProjectMetadata::default());
        let risk = RiskCalculator::heuristic(&f, &IssueType::BudgetMismatch);
        assert!((risk.value() - 0.7).abs() < 1e-9);

        let risk = RiskCalculator::heuristic(&f, &IssueType::ResourceAllocation);
        assert!((risk.value() - 0.55).abs() < 1e-9);
    }

    #[test]
    fn unknown_issue_uses_default_weight() {
        let f = features(ProjectMetadata::default());
        let risk = RiskCalculator::heuristic(&f, &IssueType::parse("Vendor Dispute"));
        assert!((risk.value() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn bumps_accumulate_and_clamp() {
        let meta = ProjectMetadata::default()
            .with_budget(2_000_000.0)
            .with_timeline_days(20.0)
            .with_complexity(9.0);
        let text = "budget timeline risk deadline milestone compliance resource";
        let f = extract_features(text, &meta);
        assert_eq!(f.technical_terms, 7.0);

        let risk = RiskCalculator::heuristic(&f, &IssueType::BudgetMismatch);
        assert_eq!(risk.value(), 1.0);

        let risk = RiskCalculator::heuristic(&f, &IssueType::ResourceAllocation);
        assert!((risk.value() - 0.95).abs() < 1e-9);
    }

    #[test]
    fn thresholds_are_strict() {
        let meta = ProjectMetadata::default()
            .with_budget(LARGE_BUDGET_THRESHOLD)
            .with_timeline_days(SHORT_TIMELINE_DAYS)
            .with_complexity(HIGH_COMPLEXITY_THRESHOLD);
        let risk = RiskCalculator::heuristic(&features(meta), &IssueType::ComplianceIssue);
        assert!((risk.value() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn multiplier_scales_and_caps() {
        let risk = RiskCalculator::apply_issue_multiplier(0.5, &IssueType::BudgetMismatch);
        assert!((risk.value() - 0.6).abs() < 1e-9);

        let risk = RiskCalculator::apply_issue_multiplier(0.9, &IssueType::BudgetMismatch);
        assert_eq!(risk.value(), 1.0);

        let risk = RiskCalculator::apply_issue_multiplier(0.5, &IssueType::ResourceAllocation);
        assert!((risk.value() - 0.45).abs() < 1e-9);
    }

    #[test]
    fn model_inputs_scale_budget_and_timeline() {
        let meta = ProjectMetadata::default()
            .with_budget(250_000.0)
            .with_timeline_days(730.0);
        let inputs = RiskCalculator::model_inputs(&extract_features("One two. Three", &meta));
        assert_eq!(inputs, [3.0, 2.0, 0.0, 2.5, 2.0]);
    }

    #[test]
    fn risk_level_bands() {
        assert_eq!(RiskLevel::from_score(UnitScore::new(0.71)), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(UnitScore::new(0.7)), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(UnitScore::new(0.41)), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(UnitScore::new(0.4)), RiskLevel::Low);
    }
}

//! Delay prediction - expected schedule slip and its probability.

use serde::{Deserialize, Serialize};

use super::narrative::{format_currency, format_quantity};
use super::risk::{HIGH_COMPLEXITY_THRESHOLD, LARGE_BUDGET_THRESHOLD, SHORT_TIMELINE_DAYS};
use super::{FeatureVector, IssueType};
use crate::domain::foundation::UnitScore;

/// Confidence attached to every delay prediction.
pub const DELAY_CONFIDENCE: f64 = 0.75;

/// Which delay table to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelayModel {
    /// Flat bumps, probability capped at 0.9.
    #[default]
    Standard,
    /// Two-step timeline and budget bands, probability capped at 0.95.
    Graduated,
}

impl DelayModel {
    /// Total expected delay in days for the given features and issue.
    pub fn expected_delay_days(&self, features: &FeatureVector, issue: &IssueType) -> u32 {
        match self {
            DelayModel::Standard => {
                let mut total = issue.standard_delay_days();
                if features.timeline_days < SHORT_TIMELINE_DAYS {
                    total += 10;
                }
                if features.budget_size > LARGE_BUDGET_THRESHOLD {
                    total += 5;
                }
                if features.complexity_score > HIGH_COMPLEXITY_THRESHOLD {
                    total += 7;
                }
                total
            }
            DelayModel::Graduated => {
                let mut total = issue.graduated_delay_days();
                if features.timeline_days < SHORT_TIMELINE_DAYS {
                    total += 15;
                } else if features.timeline_days < 60.0 {
                    total += 8;
                }
                if features.budget_size > LARGE_BUDGET_THRESHOLD {
                    total += 10;
                } else if features.budget_size > 500_000.0 {
                    total += 5;
                }
                total
            }
        }
    }

    /// Probability of slipping by `total_days`. Non-decreasing in `total_days`.
    pub fn delay_probability(&self, total_days: u32) -> UnitScore {
        let days = f64::from(total_days);
        let p = match self {
            DelayModel::Standard => (0.1 + days / 100.0).min(0.9),
            DelayModel::Graduated => (0.1 + days / 150.0).min(0.95),
        };
        UnitScore::new(p)
    }

    /// Runs the model.
    pub fn predict(&self, features: &FeatureVector, issue: &IssueType) -> DelayPrediction {
        let expected_delay_days = self.expected_delay_days(features, issue);
        DelayPrediction {
            expected_delay_days,
            delay_probability: self.delay_probability(expected_delay_days),
            confidence: UnitScore::new(DELAY_CONFIDENCE),
            risk_factors: vec![
                format!(
                    "Timeline pressure: {} days",
                    format_quantity(features.timeline_days)
                ),
                format!("Budget scale: {}", format_currency(features.budget_size)),
                format!("Issue type: {}", issue),
            ],
        }
    }
}

/// Projected schedule slip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayPrediction {
    pub expected_delay_days: u32,
    pub delay_probability: UnitScore,
    pub confidence: UnitScore,
    pub risk_factors: Vec<String>,
}

//! Issue type - the category a status report is filed under, and every
//! per-category lookup table the engine uses.
//!
//! The set is open: any label outside the five known categories parses to
//! [`IssueType::Other`] and takes the default entry of each table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of problem described by a status report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueType {
    BudgetMismatch,
    UnrealisticSchedule,
    ResourceAllocation,
    ComplianceIssue,
    TechnicalRisk,
    /// Unrecognized label, kept verbatim for narratives and risk factors.
    Other(String),
}

impl IssueType {
    /// Parses a wire label. Matching is exact apart from surrounding whitespace.
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "Budget Mismatch" => IssueType::BudgetMismatch,
            "Unrealistic Schedule" => IssueType::UnrealisticSchedule,
            "Resource Allocation" => IssueType::ResourceAllocation,
            "Compliance Issue" => IssueType::ComplianceIssue,
            "Technical Risk" => IssueType::TechnicalRisk,
            other => IssueType::Other(other.to_string()),
        }
    }

    /// Returns the label as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            IssueType::BudgetMismatch => "Budget Mismatch",
            IssueType::UnrealisticSchedule => "Unrealistic Schedule",
            IssueType::ResourceAllocation => "Resource Allocation",
            IssueType::ComplianceIssue => "Compliance Issue",
            IssueType::TechnicalRisk => "Technical Risk",
            IssueType::Other(label) => label,
        }
    }

    /// Whether the label matched one of the known categories.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, IssueType::Other(_))
    }

    /// Additive weight used by the heuristic risk scorer.
    pub fn heuristic_weight(&self) -> f64 {
        match self {
            IssueType::BudgetMismatch => 0.4,
            IssueType::UnrealisticSchedule => 0.35,
            IssueType::ResourceAllocation => 0.25,
            IssueType::ComplianceIssue => 0.3,
            IssueType::TechnicalRisk => 0.35,
            IssueType::Other(_) => 0.3,
        }
    }

    /// Multiplier applied to the classifier's base probability.
    pub fn model_multiplier(&self) -> f64 {
        match self {
            IssueType::BudgetMismatch => 1.2,
            IssueType::UnrealisticSchedule => 1.1,
            IssueType::ResourceAllocation => 0.9,
            IssueType::ComplianceIssue => 1.0,
            IssueType::TechnicalRisk => 1.15,
            IssueType::Other(_) => 1.0,
        }
    }

    /// Risk reported when the classifier cannot produce a score.
    pub fn fallback_risk(&self) -> f64 {
        match self {
            IssueType::BudgetMismatch => 0.7,
            IssueType::UnrealisticSchedule => 0.6,
            IssueType::ResourceAllocation => 0.5,
            _ => 0.5,
        }
    }

    /// Base delay in days for the standard delay model.
    pub fn standard_delay_days(&self) -> u32 {
        match self {
            IssueType::BudgetMismatch => 15,
            IssueType::UnrealisticSchedule => 20,
            IssueType::ResourceAllocation => 12,
            IssueType::ComplianceIssue => 8,
            IssueType::TechnicalRisk => 18,
            IssueType::Other(_) => 10,
        }
    }

    /// Base delay in days for the graduated delay model.
    pub fn graduated_delay_days(&self) -> u32 {
        match self {
            IssueType::BudgetMismatch => 20,
            IssueType::UnrealisticSchedule => 25,
            IssueType::ResourceAllocation => 15,
            IssueType::ComplianceIssue => 12,
            IssueType::TechnicalRisk => 18,
            IssueType::Other(_) => 10,
        }
    }
}

impl From<String> for IssueType {
    fn from(label: String) -> Self {
        IssueType::parse(&label)
    }
}

impl From<&str> for IssueType {
    fn from(label: &str) -> Self {
        IssueType::parse(label)
    }
}

impl From<IssueType> for String {
    fn from(issue: IssueType) -> Self {
        issue.as_str().to_string()
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

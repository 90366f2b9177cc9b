//! Recommendation Engine - ordered follow-up actions per issue type.

use super::IssueType;
use crate::domain::foundation::UnitScore;

/// Risk above which escalation actions are appended.
pub const ESCALATION_THRESHOLD: f64 = 0.7;

const BUDGET_MISMATCH_ACTIONS: &[&str] = &[
    "Conduct detailed budget review with stakeholders",
    "Implement stricter cost control measures",
    "Consider scope reduction or additional funding approval",
];

const UNREALISTIC_SCHEDULE_ACTIONS: &[&str] = &[
    "Break down complex tasks into smaller components",
    "Add buffer time for critical path activities",
    "Consider parallel execution of independent tasks",
];

const RESOURCE_ALLOCATION_ACTIONS: &[&str] = &[
    "Perform comprehensive skills gap analysis",
    "Redistribute workload among available team members",
    "Consider hiring additional resources or upskilling",
];

const COMPLIANCE_ISSUE_ACTIONS: &[&str] = &[
    "Review current compliance framework",
    "Engage compliance experts for guidance",
    "Implement regular compliance monitoring",
];

const TECHNICAL_RISK_ACTIONS: &[&str] = &[
    "Conduct technical feasibility assessment",
    "Engage senior technical experts",
    "Develop comprehensive risk mitigation plan",
];

const DEFAULT_ACTIONS: &[&str] = &[
    "Conduct thorough project review",
    "Engage relevant stakeholders",
    "Develop comprehensive action plan",
];

/// Appended after the base list when risk is high.
pub const ESCALATION_ACTIONS: &[&str] = &[
    "Escalate to senior management immediately",
    "Increase monitoring and reporting frequency",
    "Consider external expert consultation",
];

/// Base actions for an issue type.
pub fn base_actions(issue: &IssueType) -> &'static [&'static str] {
    match issue {
        IssueType::BudgetMismatch => BUDGET_MISMATCH_ACTIONS,
        IssueType::UnrealisticSchedule => UNREALISTIC_SCHEDULE_ACTIONS,
        IssueType::ResourceAllocation => RESOURCE_ALLOCATION_ACTIONS,
        IssueType::ComplianceIssue => COMPLIANCE_ISSUE_ACTIONS,
        IssueType::TechnicalRisk => TECHNICAL_RISK_ACTIONS,
        IssueType::Other(_) => DEFAULT_ACTIONS,
    }
}

/// Ordered recommendations: the issue's base actions, followed by the
/// escalation actions when risk exceeds [`ESCALATION_THRESHOLD`].
pub fn recommend(issue: &IssueType, risk: UnitScore) -> Vec<String> {
    let mut actions: Vec<String> = base_actions(issue).iter().map(|s| s.to_string()).collect();
    if risk.value() > ESCALATION_THRESHOLD {
        actions.extend(ESCALATION_ACTIONS.iter().map(|s| s.to_string()));
    }
    actions
}

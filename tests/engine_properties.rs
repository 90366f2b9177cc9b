//! Property tests for the scoring invariants.
//!
//! Risk must never fall as the budget grows or rise as the timeline grows,
//! delay probability must follow total delay, and every score stays in range.

use proptest::prelude::*;

use dpr_analyzer::adapters::nlp::{HeuristicRiskStrategy, LogisticRiskStrategy};
use dpr_analyzer::application::{AnalysisEngine, EngineConfig};
use dpr_analyzer::domain::analysis::{
    extract_features, recommend, AnalysisRequest, DelayModel, FeatureVector, IssueType,
    ProjectMetadata,
};
use dpr_analyzer::domain::foundation::UnitScore;
use dpr_analyzer::ports::RiskStrategy;

const REPORT: &str = "The contractor reported a delay in procurement. \
                      Infrastructure design review is pending approval.";

fn issue_type() -> impl Strategy<Value = IssueType> {
    prop_oneof![
        Just(IssueType::BudgetMismatch),
        Just(IssueType::UnrealisticSchedule),
        Just(IssueType::ResourceAllocation),
        Just(IssueType::ComplianceIssue),
        Just(IssueType::TechnicalRisk),
        Just(IssueType::Other("Land Acquisition".to_string())),
    ]
}

fn delay_model() -> impl Strategy<Value = DelayModel> {
    prop_oneof![Just(DelayModel::Standard), Just(DelayModel::Graduated)]
}

fn features(budget: f64, timeline_days: f64) -> FeatureVector {
    let metadata = ProjectMetadata::default()
        .with_budget(budget)
        .with_timeline_days(timeline_days);
    extract_features(REPORT, &metadata)
}

fn risk_strategies() -> Vec<Box<dyn RiskStrategy>> {
    vec![
        Box::new(HeuristicRiskStrategy),
        Box::new(LogisticRiskStrategy::default()),
    ]
}

fn in_unit_range(score: UnitScore) -> bool {
    (0.0..=1.0).contains(&score.value())
}

proptest! {
    #[test]
    fn risk_non_decreasing_in_budget(
        issue in issue_type(),
        low in 0.0f64..5_000_000.0,
        extra in 0.0f64..5_000_000.0,
        timeline in 1.0f64..720.0,
    ) {
        for strategy in risk_strategies() {
            let smaller = strategy.score(&features(low, timeline), &issue).unwrap();
            let larger = strategy.score(&features(low + extra, timeline), &issue).unwrap();
            prop_assert!(larger.value() >= smaller.value());
        }
    }

    #[test]
    fn risk_non_increasing_in_timeline(
        issue in issue_type(),
        budget in 0.0f64..5_000_000.0,
        short in 1.0f64..360.0,
        extra in 0.0f64..360.0,
    ) {
        for strategy in risk_strategies() {
            let tight = strategy.score(&features(budget, short), &issue).unwrap();
            let relaxed = strategy.score(&features(budget, short + extra), &issue).unwrap();
            prop_assert!(relaxed.value() <= tight.value());
        }
    }

    #[test]
    fn delay_probability_follows_total_delay(
        model in delay_model(),
        days in 0u32..200,
        extra in 0u32..200,
    ) {
        let fewer = model.delay_probability(days);
        let more = model.delay_probability(days + extra);
        prop_assert!(more.value() >= fewer.value());
        prop_assert!(in_unit_range(more));
    }

    #[test]
    fn escalation_only_appends(issue in issue_type(), low in 0.0f64..=0.7, high in 0.71f64..=1.0) {
        let base = recommend(&issue, UnitScore::new(low));
        let escalated = recommend(&issue, UnitScore::new(high));
        prop_assert!(escalated.len() > base.len());
        prop_assert_eq!(&escalated[..base.len()], &base[..]);
    }

    #[test]
    fn analysis_scores_stay_in_range(
        text in "[A-Za-z0-9 $%.,/]{0,200}",
        issue in issue_type(),
        budget in 0.0f64..10_000_000.0,
        timeline in 1.0f64..1000.0,
        complexity in 1.0f64..10.0,
        model in delay_model(),
    ) {
        let request = AnalysisRequest::new(format!("Status update. {}", text), issue.as_str())
            .unwrap()
            .with_metadata(
                ProjectMetadata::default()
                    .with_budget(budget)
                    .with_timeline_days(timeline)
                    .with_complexity(complexity),
            );
        let engine = AnalysisEngine::basic(EngineConfig { delay_model: model });

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let result = runtime.block_on(engine.analyze(&request)).unwrap();

        prop_assert!((-1.0..=1.0).contains(&result.sentiment_score.value()));
        prop_assert!(in_unit_range(result.confidence_score));
        prop_assert!(in_unit_range(result.completeness_score));
        prop_assert!(in_unit_range(result.compliance_score));
        prop_assert!(in_unit_range(result.risk_score));
        prop_assert!(result.compliance_score.value() >= 0.4);
        let delay = result.delay_prediction.unwrap();
        prop_assert!(in_unit_range(delay.delay_probability));
    }
}

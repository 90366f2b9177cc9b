//! Basic strategies: keyword sentiment, regex entities and heuristic risk.
//!
//! These never fail and need nothing loaded, so they back every slot whose
//! advanced implementation is missing or failing.

use async_trait::async_trait;

use crate::domain::analysis::{
    extract_basic_entities, keyword_sentiment, Entity, FeatureVector, IssueType, RiskCalculator,
    SentimentReading,
};
use crate::domain::foundation::UnitScore;
use crate::ports::{
    EntityStrategy, ModelUnavailableError, RiskStrategy, SentimentStrategy, StrategyDescriptor,
};

/// Sentiment from fixed positive and negative keyword lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSentimentStrategy;

#[async_trait]
impl SentimentStrategy for KeywordSentimentStrategy {
    async fn score(&self, text: &str) -> Result<SentimentReading, ModelUnavailableError> {
        Ok(keyword_sentiment(text))
    }

    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor::basic("keyword")
    }
}

/// Dates, money and percentages found by regex.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEntityStrategy;

#[async_trait]
impl EntityStrategy for RegexEntityStrategy {
    async fn extract(&self, text: &str) -> Result<Vec<Entity>, ModelUnavailableError> {
        Ok(extract_basic_entities(text))
    }

    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor::basic("regex")
    }
}

/// Additive heuristic risk.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicRiskStrategy;

impl RiskStrategy for HeuristicRiskStrategy {
    fn score(
        &self,
        features: &FeatureVector,
        issue: &IssueType,
    ) -> Result<UnitScore, ModelUnavailableError> {
        Ok(RiskCalculator::heuristic(features, issue))
    }

    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor::basic("heuristic")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{extract_features, ProjectMetadata};

    #[tokio::test]
    async fn keyword_strategy_matches_domain_scorer() {
        let text = "Great progress but one concern remains";
        let reading = KeywordSentimentStrategy.score(text).await.unwrap();
        assert_eq!(reading, keyword_sentiment(text));
    }

    #[tokio::test]
    async fn regex_strategy_finds_money() {
        let entities = RegexEntityStrategy
            .extract("Cost is $5,000 and 20% over budget")
            .await
            .unwrap();
        assert_eq!(entities.len(), 2);
    }

    #[test]
    fn heuristic_strategy_never_fails() {
        let f = extract_features("text", &ProjectMetadata::default());
        let risk = HeuristicRiskStrategy.score(&f, &IssueType::BudgetMismatch).unwrap();
        assert!((risk.value() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn descriptors_are_basic() {
        assert!(!KeywordSentimentStrategy.descriptor().is_advanced());
        assert!(!RegexEntityStrategy.descriptor().is_advanced());
        assert!(!HeuristicRiskStrategy.descriptor().is_advanced());
    }
}

//! Mock strategies for testing.
//!
//! Each mock returns a configured result and records the text it was
//! called with, so tests can drive the engine's fallback paths.
//!
//! # Example
//!
//! ```ignore
//! let sentiment = MockSentimentStrategy::failing(ModelUnavailableError::Timeout { timeout_secs: 5 });
//! let engine = AnalysisEngine::new(StrategySet::basic().with_sentiment(Arc::new(sentiment.clone())), config);
//! engine.analyze(request).await?;
//! assert_eq!(sentiment.calls().len(), 1);
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::analysis::{Entity, FeatureVector, IssueType, SentimentReading};
use crate::domain::foundation::UnitScore;
use crate::ports::{
    EntityStrategy, ModelUnavailableError, RiskStrategy, SentimentStrategy, StrategyDescriptor,
};

fn record(calls: &Arc<Mutex<Vec<String>>>, text: &str) {
    if let Ok(mut calls) = calls.lock() {
        calls.push(text.to_string());
    }
}

fn recorded(calls: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
    calls.lock().map(|c| c.clone()).unwrap_or_default()
}

/// Mock sentiment strategy.
#[derive(Debug, Clone)]
pub struct MockSentimentStrategy {
    result: Result<SentimentReading, ModelUnavailableError>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockSentimentStrategy {
    /// Always answers with `reading`.
    pub fn returning(reading: SentimentReading) -> Self {
        Self {
            result: Ok(reading),
            calls: Arc::default(),
        }
    }

    /// Always fails with `error`.
    pub fn failing(error: ModelUnavailableError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::default(),
        }
    }

    /// Texts this mock has been called with.
    pub fn calls(&self) -> Vec<String> {
        recorded(&self.calls)
    }
}

#[async_trait]
impl SentimentStrategy for MockSentimentStrategy {
    async fn score(&self, text: &str) -> Result<SentimentReading, ModelUnavailableError> {
        record(&self.calls, text);
        self.result.clone()
    }

    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor::advanced("mock")
    }
}

/// Mock entity strategy.
#[derive(Debug, Clone)]
pub struct MockEntityStrategy {
    result: Result<Vec<Entity>, ModelUnavailableError>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockEntityStrategy {
    pub fn returning(entities: Vec<Entity>) -> Self {
        Self {
            result: Ok(entities),
            calls: Arc::default(),
        }
    }

    pub fn failing(error: ModelUnavailableError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        recorded(&self.calls)
    }
}

#[async_trait]
impl EntityStrategy for MockEntityStrategy {
    async fn extract(&self, text: &str) -> Result<Vec<Entity>, ModelUnavailableError> {
        record(&self.calls, text);
        self.result.clone()
    }

    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor::advanced("mock")
    }
}

/// Mock risk strategy.
#[derive(Debug, Clone)]
pub struct MockRiskStrategy {
    result: Result<UnitScore, ModelUnavailableError>,
}

impl MockRiskStrategy {
    pub fn returning(risk: f64) -> Self {
        Self {
            result: Ok(UnitScore::new(risk)),
        }
    }

    pub fn failing(error: ModelUnavailableError) -> Self {
        Self { result: Err(error) }
    }
}

impl RiskStrategy for MockRiskStrategy {
    fn score(
        &self,
        _features: &FeatureVector,
        _issue: &IssueType,
    ) -> Result<UnitScore, ModelUnavailableError> {
        self.result.clone()
    }

    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor::advanced("mock")
    }
}

//! Sentiment Strategy Port - the sentiment scoring slot.
//!
//! Implementations either count keywords or call a pretrained classifier.
//! Both return the same [`SentimentReading`] so the engine can swap one for
//! the other without changing its output shape.

use async_trait::async_trait;

use super::{ModelUnavailableError, StrategyDescriptor};
use crate::domain::analysis::SentimentReading;

/// Port for scoring the sentiment of report text.
#[async_trait]
pub trait SentimentStrategy: Send + Sync {
    /// Scores the text.
    ///
    /// Model-backed implementations receive text already truncated to the
    /// model input limit by their adapter.
    async fn score(&self, text: &str) -> Result<SentimentReading, ModelUnavailableError>;

    /// Identifies the implementation.
    fn descriptor(&self) -> StrategyDescriptor;
}

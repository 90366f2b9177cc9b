//! Remote Sentiment - classifier-backed implementation of SentimentStrategy.
//!
//! Accepts both response layouts hosted text classifiers use: a flat list of
//! `{label, score}` pairs, or that list wrapped once more per input.

use async_trait::async_trait;
use serde::Deserialize;

use super::InferenceClient;
use crate::domain::analysis::SentimentReading;
use crate::ports::{ModelUnavailableError, SentimentStrategy, StrategyDescriptor};

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifierResponse {
    Batched(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassifierResponse {
    /// Highest-scoring label for the first input.
    fn top(self) -> Option<LabelScore> {
        let candidates = match self {
            ClassifierResponse::Batched(batches) => batches.into_iter().next()?,
            ClassifierResponse::Flat(labels) => labels,
        };
        candidates
            .into_iter()
            .filter(|c| c.score.is_finite())
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

/// Sentiment from a hosted pretrained classifier.
pub struct RemoteSentimentStrategy {
    client: InferenceClient,
}

impl RemoteSentimentStrategy {
    pub fn new(client: InferenceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SentimentStrategy for RemoteSentimentStrategy {
    async fn score(&self, text: &str) -> Result<SentimentReading, ModelUnavailableError> {
        let response: ClassifierResponse = self.client.infer(text, None).await?;
        let top = response
            .top()
            .ok_or_else(|| ModelUnavailableError::InvalidOutput("classifier returned no labels".into()))?;

        Ok(SentimentReading::from_classifier(&top.label, top.score))
    }

    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor::advanced("remote-classifier")
    }
}

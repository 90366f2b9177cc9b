//! Remote Entities - token-classification-backed implementation of
//! EntityStrategy.
//!
//! The endpoint is asked for `simple` aggregation. If it answers with raw
//! token predictions instead of grouped spans, the spans are grouped here.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{json, Value};

use super::InferenceClient;
use crate::domain::analysis::{aggregate_simple, Entity, EntityLabel, TokenPrediction};
use crate::ports::{EntityStrategy, ModelUnavailableError, StrategyDescriptor};

static SIMPLE_AGGREGATION: Lazy<Value> = Lazy::new(|| json!({ "aggregation_strategy": "simple" }));

#[derive(Debug, Deserialize)]
struct RawPrediction {
    /// Present on grouped spans.
    entity_group: Option<String>,
    /// Present on ungrouped token predictions, e.g. `B-PER`.
    entity: Option<String>,
    word: String,
    score: f64,
}

/// Entities from a hosted token-classification model.
pub struct RemoteEntityStrategy {
    client: InferenceClient,
}

impl RemoteEntityStrategy {
    pub fn new(client: InferenceClient) -> Self {
        Self { client }
    }
}

fn into_entities(predictions: Vec<RawPrediction>) -> Result<Vec<Entity>, ModelUnavailableError> {
    if predictions.iter().all(|p| p.entity_group.is_some()) {
        return Ok(predictions
            .into_iter()
            .filter_map(|p| {
                p.entity_group
                    .map(|group| Entity::new(p.word.trim(), EntityLabel::from(group), p.score))
            })
            .collect());
    }

    let tokens = predictions
        .into_iter()
        .map(|p| match p.entity {
            Some(tag) => Ok(TokenPrediction::new(p.word, tag, p.score)),
            None => Err(ModelUnavailableError::Parse(format!(
                "prediction for '{}' has no entity label",
                p.word
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(aggregate_simple(&tokens))
}

#[async_trait]
impl EntityStrategy for RemoteEntityStrategy {
    async fn extract(&self, text: &str) -> Result<Vec<Entity>, ModelUnavailableError> {
        let predictions: Vec<RawPrediction> =
            self.client.infer(text, Some(&SIMPLE_AGGREGATION)).await?;
        into_entities(predictions)
    }

    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor::advanced("remote-ner")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::nlp::test_support::spawn_model_server;
    use crate::adapters::nlp::InferenceConfig;
    use axum::{routing::post, Json, Router};

    async fn strategy_answering(body: Value) -> RemoteEntityStrategy {
        let router = Router::new().route("/", post(move || async move { Json(body) }));
        let endpoint = spawn_model_server(router).await;
        RemoteEntityStrategy::new(InferenceClient::new(InferenceConfig::new(endpoint)).unwrap())
    }

    #[tokio::test]
    async fn grouped_spans_pass_through() {
        let strategy = strategy_answering(json!([
            { "entity_group": "ORG", "word": "Larsen & Toubro", "score": 0.98, "start": 0, "end": 15 },
            { "entity_group": "LOC", "word": "Chennai", "score": 0.91, "start": 30, "end": 37 }
        ]))
        .await;

        let entities = strategy.extract("Larsen & Toubro reported from Chennai").await.unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].label, EntityLabel::Organization);
        assert_eq!(entities[0].text, "Larsen & Toubro");
        assert_eq!(entities[1].label, EntityLabel::Location);
    }

    #[tokio::test]
    async fn token_predictions_are_grouped_locally() {
        let strategy = strategy_answering(json!([
            { "entity": "B-PER", "word": "Anil", "score": 0.9 },
            { "entity": "I-PER", "word": "Kumar", "score": 0.7 },
            { "entity": "B-LOC", "word": "Pune", "score": 0.95 }
        ]))
        .await;

        let entities = strategy.extract("Anil Kumar visited Pune").await.unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].text, "Anil Kumar");
        assert!((entities[0].confidence.value() - 0.8).abs() < 1e-9);
        assert_eq!(entities[1].text, "Pune");
    }

    #[tokio::test]
    async fn prediction_without_label_is_a_parse_error() {
        let strategy = strategy_answering(json!([{ "word": "Pune", "score": 0.95 }])).await;
        let err = strategy.extract("Pune").await.unwrap_err();
        assert!(matches!(err, ModelUnavailableError::Parse(_)));
    }

    #[tokio::test]
    async fn no_predictions_means_no_entities() {
        let strategy = strategy_answering(json!([])).await;
        assert!(strategy.extract("nothing here").await.unwrap().is_empty());
    }
}

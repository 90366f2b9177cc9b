//! ModelLoader - builds the strategy set once at startup.
//!
//! Each slot is resolved independently:
//!
//! - Sentiment and entities use the hosted model when advanced NLP is enabled,
//!   an endpoint is configured, and the endpoint answers a probe. An endpoint
//!   that fails its probe degrades the slot to its basic strategy, unless
//!   `require_advanced` is set, in which case startup fails.
//! - Risk uses the logistic model when enabled. A configured parameter file
//!   that cannot be read or validated always fails startup.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use super::engine::{AnalysisEngine, EngineConfig, StrategySet};
use super::readiness::EngineGate;
use crate::adapters::nlp::{
    InferenceClient, InferenceConfig, LogisticRiskStrategy, RemoteEntityStrategy,
    RemoteSentimentStrategy, RiskModelError, RiskModelParams,
};
use crate::config::{AppConfig, EngineSettings, FeatureFlags, ModelsConfig};
use crate::ports::{ModelUnavailableError, StrategyKind};

/// Errors that abort model loading.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("risk model could not be loaded: {0}")]
    RiskModel(#[from] RiskModelError),

    #[error("{slot} model at {endpoint} is required but unavailable: {source}")]
    AdvancedRequired {
        slot: &'static str,
        endpoint: String,
        #[source]
        source: ModelUnavailableError,
    },
}

/// Hosted NLP models in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NlpModelStatus {
    pub sentiment_pipeline: bool,
    pub ner_pipeline: bool,
}

/// Numeric risk model in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MlModelStatus {
    pub random_forest: bool,
    pub scaler: bool,
}

/// Rule-based components, always available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicModelStatus {
    pub keyword_sentiment: bool,
    pub regex_entities: bool,
    pub language_detector: bool,
}

/// Which strategies back each slot, keyed by fixed identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelStatus {
    pub nlp_models: NlpModelStatus,
    pub ml_models: MlModelStatus,
    pub basic_models: BasicModelStatus,
    /// Count of model-backed slots in use; the risk model counts once.
    pub total_models: usize,
    pub service_type: StrategyKind,
}

impl ModelStatus {
    pub fn from_strategies(strategies: &StrategySet) -> Self {
        let sentiment = strategies.sentiment.descriptor().is_advanced();
        let ner = strategies.entities.descriptor().is_advanced();
        let risk_model = strategies.risk.descriptor().is_advanced();

        let nlp_models = NlpModelStatus {
            sentiment_pipeline: sentiment,
            ner_pipeline: ner,
        };
        // The logistic model carries its own standardization, so both flags move together.
        let ml_models = MlModelStatus {
            random_forest: risk_model,
            scaler: risk_model,
        };
        let total_models = [sentiment, ner, risk_model]
            .iter()
            .filter(|loaded| **loaded)
            .count();

        Self {
            nlp_models,
            ml_models,
            basic_models: BasicModelStatus {
                keyword_sentiment: true,
                regex_entities: true,
                language_detector: true,
            },
            total_models,
            service_type: strategies.service_kind(),
        }
    }
}

/// The engine plus a snapshot of what was loaded.
pub struct LoadedModels {
    pub engine: Arc<AnalysisEngine>,
    pub status: ModelStatus,
}

/// Resolves the strategy for every slot from configuration.
#[derive(Debug, Clone)]
pub struct ModelLoader {
    models: ModelsConfig,
    engine: EngineSettings,
    features: FeatureFlags,
}

impl ModelLoader {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            models: config.models.clone(),
            engine: config.engine.clone(),
            features: config.features.clone(),
        }
    }

    /// Loads models into `gate`. Later calls return the already loaded models.
    pub async fn load_models<'g>(&self, gate: &'g EngineGate) -> Result<&'g LoadedModels, ModelLoadError> {
        gate.open_with(|| self.load()).await
    }

    /// Builds a fresh engine.
    pub async fn load(&self) -> Result<LoadedModels, ModelLoadError> {
        let mut strategies = StrategySet::basic();

        if self.features.enable_advanced_nlp {
            if let Some(client) = self.hosted_model("sentiment", self.models.sentiment_endpoint.as_deref()).await? {
                strategies = strategies.with_sentiment(Arc::new(RemoteSentimentStrategy::new(client)));
            }
            if let Some(client) = self.hosted_model("ner", self.models.ner_endpoint.as_deref()).await? {
                strategies = strategies.with_entities(Arc::new(RemoteEntityStrategy::new(client)));
            }
        }

        if self.features.enable_model_risk {
            let params = match &self.models.risk_model_path {
                Some(path) => {
                    let params = RiskModelParams::from_path(path)?;
                    info!(path = %path.display(), "Loaded risk model parameters");
                    params
                }
                None => RiskModelParams::default(),
            };
            strategies = strategies.with_risk(Arc::new(LogisticRiskStrategy::new(params)));
        }

        let status = ModelStatus::from_strategies(&strategies);
        info!(
            sentiment = %strategies.sentiment.descriptor().name,
            entities = %strategies.entities.descriptor().name,
            risk = %strategies.risk.descriptor().name,
            delay_model = ?self.engine.delay_model,
            total_models = status.total_models,
            service_type = %status.service_type,
            "Models loaded"
        );

        let engine = AnalysisEngine::new(
            strategies,
            EngineConfig {
                delay_model: self.engine.delay_model,
            },
        );

        Ok(LoadedModels {
            engine: Arc::new(engine),
            status,
        })
    }

    /// Client for a hosted model that answered its probe, if any.
    async fn hosted_model(
        &self,
        slot: &'static str,
        endpoint: Option<&str>,
    ) -> Result<Option<InferenceClient>, ModelLoadError> {
        let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) else {
            return Ok(None);
        };

        let probed = match InferenceClient::new(self.inference_config(endpoint)) {
            Ok(client) => client.probe().await.map(|_| client),
            Err(err) => Err(err),
        };

        match probed {
            Ok(client) => {
                info!(slot, endpoint, "Hosted model available");
                Ok(Some(client))
            }
            Err(source) if self.models.require_advanced => Err(ModelLoadError::AdvancedRequired {
                slot,
                endpoint: endpoint.to_string(),
                source,
            }),
            Err(err) => {
                warn!(slot, endpoint, error = %err, "Hosted model unavailable, using basic strategy");
                Ok(None)
            }
        }
    }

    fn inference_config(&self, endpoint: &str) -> InferenceConfig {
        let config = InferenceConfig::new(endpoint)
            .with_timeout(self.models.timeout())
            .with_max_input_chars(self.engine.max_model_input_chars);
        match &self.models.api_token {
            Some(token) => config.with_api_token(token.clone()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::nlp::test_support::spawn_model_server;
    use axum::{routing::post, Json, Router};
    use serde_json::json;
    use std::io::Write;

    const UNREACHABLE: &str = "http://127.0.0.1:9/model";

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.models.timeout_secs = 2;
        config
    }

    async fn sentiment_server() -> String {
        let router = Router::new().route(
            "/",
            post(|| async { Json(json!([[{ "label": "POSITIVE", "score": 0.9 }]])) }),
        );
        spawn_model_server(router).await
    }

    #[tokio::test]
    async fn defaults_use_logistic_risk_and_basic_nlp() {
        let loaded = ModelLoader::new(&config()).load().await.unwrap();

        assert!(!loaded.status.nlp_models.sentiment_pipeline);
        assert!(!loaded.status.nlp_models.ner_pipeline);
        assert!(loaded.status.ml_models.random_forest);
        assert!(loaded.status.ml_models.scaler);
        assert_eq!(loaded.status.total_models, 1);
        assert_eq!(loaded.status.service_type, StrategyKind::Advanced);
    }

    #[tokio::test]
    async fn all_flags_off_is_basic_service() {
        let mut config = config();
        config.features.enable_model_risk = false;
        config.features.enable_advanced_nlp = false;

        let loaded = ModelLoader::new(&config).load().await.unwrap();
        assert_eq!(loaded.status.total_models, 0);
        assert_eq!(loaded.status.service_type, StrategyKind::Basic);
        assert!(loaded.status.basic_models.language_detector);
    }

    #[tokio::test]
    async fn reachable_endpoint_enables_hosted_sentiment() {
        let mut config = config();
        config.models.sentiment_endpoint = Some(sentiment_server().await);

        let loaded = ModelLoader::new(&config).load().await.unwrap();
        assert!(loaded.status.nlp_models.sentiment_pipeline);
        assert_eq!(loaded.status.total_models, 2);
    }

    #[tokio::test]
    async fn unreachable_endpoint_degrades_to_basic() {
        let mut config = config();
        config.models.ner_endpoint = Some(UNREACHABLE.to_string());

        let loaded = ModelLoader::new(&config).load().await.unwrap();
        assert!(!loaded.status.nlp_models.ner_pipeline);
    }

    #[tokio::test]
    async fn unreachable_required_endpoint_fails_startup() {
        let mut config = config();
        config.models.ner_endpoint = Some(UNREACHABLE.to_string());
        config.models.require_advanced = true;

        let err = ModelLoader::new(&config).load().await.err().unwrap();
        assert!(matches!(err, ModelLoadError::AdvancedRequired { slot: "ner", .. }));
    }

    #[tokio::test]
    async fn broken_risk_model_file_fails_startup() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "weights: [0.0, 0.0, 0.0, -1.0, 0.0]\nbias: 0.0\nmeans: [0, 0, 0, 0, 0]\nscales: [1, 1, 1, 1, 1]").unwrap();

        let mut config = config();
        config.models.risk_model_path = Some(file.path().to_path_buf());

        let err = ModelLoader::new(&config).load().await.err().unwrap();
        assert!(matches!(err, ModelLoadError::RiskModel(RiskModelError::Invalid(_))));
    }

    #[tokio::test]
    async fn load_models_is_idempotent() {
        let gate = EngineGate::new();
        let loader = ModelLoader::new(&config());

        let first = Arc::clone(&loader.load_models(&gate).await.unwrap().engine);
        let second = Arc::clone(&loader.load_models(&gate).await.unwrap().engine);

        assert!(Arc::ptr_eq(&first, &second));
        assert!(gate.is_ready());
    }
}

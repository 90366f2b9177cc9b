//! AnalysisEngine - composes the analysis pipeline for one report.
//!
//! The engine owns one strategy per slot plus the basic strategies used as
//! substitutes. A run walks the stage machine
//! `Received -> LanguageDetected -> FeaturesExtracted -> Scored ->
//! (DelayPredicted) -> Assembled -> Completed` and either returns a complete
//! result or an error, never a partial result.

use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::adapters::nlp::{
    HeuristicRiskStrategy, KeywordSentimentStrategy, RegexEntityStrategy,
};
use crate::domain::analysis::{
    completeness_score, compliance_score, compose_narrative, confidence_score, detect_language,
    extract_features, recommend, risk_factors, AnalysisRequest, AnalysisResult, AnalysisStage,
    DelayModel, Entity, FeatureVector, IssueType, NarrativeInputs, PipelineTrace,
    SentimentReading,
};
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode, UnitScore, ValidationError};
use crate::ports::{EntityStrategy, RiskStrategy, SentimentStrategy, StrategyKind};

/// Errors surfaced by the engine.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Request fields were invalid.
    #[error("invalid input: {0}")]
    Input(#[from] ValidationError),

    /// Feature extraction or scoring failed unexpectedly.
    #[error("analysis failed: {0}")]
    Computation(DomainError),

    /// Models have not finished loading.
    #[error("analysis engine is not ready")]
    NotReady,
}

impl AnalysisError {
    fn computation(code: ErrorCode, message: impl Into<String>) -> Self {
        AnalysisError::Computation(DomainError::new(code, message))
    }
}

/// Immutable engine settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    pub delay_model: DelayModel,
}

/// One strategy per capability slot.
#[derive(Clone)]
pub struct StrategySet {
    pub sentiment: Arc<dyn SentimentStrategy>,
    pub entities: Arc<dyn EntityStrategy>,
    pub risk: Arc<dyn RiskStrategy>,
}

impl StrategySet {
    /// Keyword sentiment, regex entities and heuristic risk.
    pub fn basic() -> Self {
        Self {
            sentiment: Arc::new(KeywordSentimentStrategy),
            entities: Arc::new(RegexEntityStrategy),
            risk: Arc::new(HeuristicRiskStrategy),
        }
    }

    pub fn with_sentiment(mut self, sentiment: Arc<dyn SentimentStrategy>) -> Self {
        self.sentiment = sentiment;
        self
    }

    pub fn with_entities(mut self, entities: Arc<dyn EntityStrategy>) -> Self {
        self.entities = entities;
        self
    }

    pub fn with_risk(mut self, risk: Arc<dyn RiskStrategy>) -> Self {
        self.risk = risk;
        self
    }

    /// `Advanced` when any slot is model-backed.
    pub fn service_kind(&self) -> StrategyKind {
        let any_advanced = self.sentiment.descriptor().is_advanced()
            || self.entities.descriptor().is_advanced()
            || self.risk.descriptor().is_advanced();
        if any_advanced {
            StrategyKind::Advanced
        } else {
            StrategyKind::Basic
        }
    }
}

impl Default for StrategySet {
    fn default() -> Self {
        Self::basic()
    }
}

/// The analysis orchestrator.
pub struct AnalysisEngine {
    strategies: StrategySet,
    fallback_sentiment: KeywordSentimentStrategy,
    fallback_entities: RegexEntityStrategy,
    config: EngineConfig,
}

impl AnalysisEngine {
    pub fn new(strategies: StrategySet, config: EngineConfig) -> Self {
        Self {
            strategies,
            fallback_sentiment: KeywordSentimentStrategy,
            fallback_entities: RegexEntityStrategy,
            config,
        }
    }

    /// Engine with every slot on its basic strategy.
    pub fn basic(config: EngineConfig) -> Self {
        Self::new(StrategySet::basic(), config)
    }

    pub fn strategies(&self) -> &StrategySet {
        &self.strategies
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyzes one report.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        self.run(request).await.map(|(result, _)| result)
    }

    /// Analyzes one report and returns the stages it passed through.
    pub(crate) async fn run(
        &self,
        request: &AnalysisRequest,
    ) -> Result<(AnalysisResult, PipelineTrace), AnalysisError> {
        let started = Instant::now();
        let analysis_id = AnalysisId::new();
        let issue = request.issue_type();
        let text = request.text();
        let mut trace = PipelineTrace::new();

        if !issue.is_recognized() {
            debug!(%analysis_id, issue_type = %issue, "Unrecognized issue type, using default tables");
        }

        let language = detect_language(text);
        advance(&mut trace, AnalysisStage::LanguageDetected, &analysis_id)?;

        let (sentiment, entities) = tokio::join!(
            self.score_sentiment(text, &analysis_id),
            self.extract_entities(text, &analysis_id)
        );

        let features = extract_features(text, request.metadata());
        if let Some(name) = features.first_non_finite() {
            error!(%analysis_id, feature = name, "Non-finite feature value");
            return Err(AnalysisError::computation(
                ErrorCode::NonFiniteFeature,
                format!("feature '{}' is not finite", name),
            ));
        }
        advance(&mut trace, AnalysisStage::FeaturesExtracted, &analysis_id)?;

        let risk = self.score_risk(&features, issue, &analysis_id);
        let confidence = confidence_score(sentiment.score);
        let completeness = completeness_score(features.word_count);
        let compliance = compliance_score(risk);
        advance(&mut trace, AnalysisStage::Scored, &analysis_id)?;

        let delay_prediction = if request.include_delay_prediction() {
            advance(&mut trace, AnalysisStage::DelayPredicted, &analysis_id)?;
            Some(self.config.delay_model.predict(&features, issue))
        } else {
            None
        };

        let narrative_inputs = NarrativeInputs {
            issue,
            sentiment: &sentiment,
            completeness,
            risk,
            entity_count: entities.len(),
            language,
        };
        let analysis = compose_narrative(&narrative_inputs);
        let factors = if request.include_risk_assessment() {
            risk_factors(&narrative_inputs, &features)
        } else {
            Vec::new()
        };
        let recommendations = recommend(issue, risk);
        advance(&mut trace, AnalysisStage::Assembled, &analysis_id)?;

        let result = AnalysisResult {
            analysis,
            sentiment_score: sentiment.score,
            confidence_score: confidence,
            completeness_score: completeness,
            compliance_score: compliance,
            risk_score: risk,
            language_detected: language.to_string(),
            entities,
            recommendations,
            risk_factors: factors,
            delay_prediction,
            processing_time: started.elapsed().as_secs_f64(),
        };
        advance(&mut trace, AnalysisStage::Completed, &analysis_id)?;

        debug!(
            %analysis_id,
            issue_type = %issue,
            risk = result.risk_score.value(),
            elapsed = result.processing_time,
            "Analysis completed"
        );

        Ok((result, trace))
    }

    async fn score_sentiment(&self, text: &str, analysis_id: &AnalysisId) -> SentimentReading {
        match self.strategies.sentiment.score(text).await {
            Ok(reading) => reading,
            Err(err) => {
                warn!(
                    %analysis_id,
                    strategy = %self.strategies.sentiment.descriptor().name,
                    error = %err,
                    "Sentiment model unavailable, using keyword sentiment"
                );
                keyword_fallback(&self.fallback_sentiment, text).await
            }
        }
    }

    async fn extract_entities(&self, text: &str, analysis_id: &AnalysisId) -> Vec<Entity> {
        match self.strategies.entities.extract(text).await {
            Ok(entities) => entities,
            Err(err) => {
                warn!(
                    %analysis_id,
                    strategy = %self.strategies.entities.descriptor().name,
                    error = %err,
                    "Entity model unavailable, using regex entities"
                );
                regex_fallback(&self.fallback_entities, text).await
            }
        }
    }

    fn score_risk(&self, features: &FeatureVector, issue: &IssueType, analysis_id: &AnalysisId) -> UnitScore {
        match self.strategies.risk.score(features, issue) {
            Ok(risk) => risk,
            Err(err) => {
                let fallback = issue.fallback_risk();
                warn!(
                    %analysis_id,
                    strategy = %self.strategies.risk.descriptor().name,
                    error = %err,
                    fallback,
                    "Risk model failed, using fixed fallback"
                );
                UnitScore::new(fallback)
            }
        }
    }
}

async fn keyword_fallback(strategy: &KeywordSentimentStrategy, text: &str) -> SentimentReading {
    strategy
        .score(text)
        .await
        .unwrap_or_else(|_| SentimentReading::neutral())
}

async fn regex_fallback(strategy: &RegexEntityStrategy, text: &str) -> Vec<Entity> {
    strategy.extract(text).await.unwrap_or_default()
}

fn advance(
    trace: &mut PipelineTrace,
    next: AnalysisStage,
    analysis_id: &AnalysisId,
) -> Result<(), AnalysisError> {
    trace.advance(next).map(|_| ()).map_err(|err| {
        error!(%analysis_id, stage = %next, error = %err, "Illegal pipeline transition");
        AnalysisError::computation(ErrorCode::InvalidStateTransition, err.to_string())
    })?;
    debug!(%analysis_id, stage = %next, "Stage entered");
    Ok(())
}

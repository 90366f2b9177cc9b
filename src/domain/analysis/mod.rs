//! Analysis Module - Pure domain services for status report analysis.
//!
//! Everything here is stateless: functions take text, metadata and
//! computed scores and return new values. Model-backed behavior lives
//! behind the ports; this module only holds the rules every strategy
//! shares.
//!
//! # Components
//!
//! - `IssueType` - report category and its lookup tables
//! - `detect_language` - script-based language tag
//! - `extract_features` - numeric view of a report
//! - `keyword_sentiment` / `extract_basic_entities` - keyword and regex scorers
//! - `RiskCalculator` - heuristic risk and the model multiplier
//! - `DelayModel` - expected delay days and probability
//! - `recommend` - ordered follow-up actions
//! - `compose_narrative` - the human-readable summary
//! - `AnalysisStage` - stage machine for one run

mod delay;
mod entities;
mod features;
mod issue_type;
mod language;
pub mod narrative;
mod pipeline;
mod recommendations;
mod request;
mod result;
mod risk;
mod scores;
mod sentiment;

pub use delay::{DelayModel, DelayPrediction, DELAY_CONFIDENCE};
pub use entities::{aggregate_simple, extract_basic_entities, Entity, EntityLabel, TokenPrediction};
pub use features::{extract_features, FeatureVector};
pub use issue_type::IssueType;
pub use language::{detect_language, DEFAULT_LANGUAGE};
pub use narrative::{compose_narrative, risk_factors, NarrativeInputs};
pub use pipeline::{AnalysisStage, PipelineTrace};
pub use recommendations::{base_actions, recommend, ESCALATION_ACTIONS, ESCALATION_THRESHOLD};
pub use request::{
    AnalysisRequest, ProjectMetadata, DEFAULT_BUDGET, DEFAULT_COMPLEXITY, DEFAULT_TEAM_SIZE,
    DEFAULT_TIMELINE_DAYS,
};
pub use result::{AnalysisResult, FileAnalysisSummary, FILE_SUMMARY_RECOMMENDATIONS};
pub use risk::{RiskCalculator, RiskLevel, MODEL_INPUT_DIMENSION};
pub use scores::{completeness_score, compliance_score, confidence_score};
pub use sentiment::{keyword_sentiment, SentimentLabel, SentimentReading, NEUTRAL_BAND};

//! Analysis results as returned to callers.

use serde::{Deserialize, Serialize};

use super::{DelayPrediction, Entity};
use crate::domain::foundation::{Polarity, UnitScore};

/// Number of recommendations carried into a file summary.
pub const FILE_SUMMARY_RECOMMENDATIONS: usize = 3;

/// Full outcome of analyzing one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analysis: String,
    pub sentiment_score: Polarity,
    pub confidence_score: UnitScore,
    pub completeness_score: UnitScore,
    pub compliance_score: UnitScore,
    pub risk_score: UnitScore,
    pub language_detected: String,
    pub entities: Vec<Entity>,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    pub delay_prediction: Option<DelayPrediction>,
    /// Wall-clock seconds spent in the engine.
    pub processing_time: f64,
}

/// Condensed outcome for an uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysisSummary {
    pub file_analysis: String,
    pub extracted_insights: String,
    pub confidence: UnitScore,
    pub recommendations: Vec<String>,
    pub entities: Vec<Entity>,
    pub sentiment_score: Polarity,
}

impl FileAnalysisSummary {
    /// Summarizes a result for a file of `file_type` holding `char_count` characters.
    pub fn from_result(file_type: &str, char_count: usize, result: AnalysisResult) -> Self {
        let mut recommendations = result.recommendations;
        recommendations.truncate(FILE_SUMMARY_RECOMMENDATIONS);

        Self {
            file_analysis: format!("Processed {} file with {} characters", file_type, char_count),
            extracted_insights: result.analysis,
            confidence: result.confidence_score,
            recommendations,
            entities: result.entities,
            sentiment_score: result.sentiment_score,
        }
    }
}

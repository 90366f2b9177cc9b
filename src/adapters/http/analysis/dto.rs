//! Request and response DTOs for the analysis endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::{AnalyzeFileCommand, AnalyzeReportCommand, ModelStatus};
use crate::domain::analysis::DEFAULT_LANGUAGE;
use crate::domain::foundation::{DomainError, ErrorCode};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub project_data: Map<String, Value>,
    pub issue_type: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_true")]
    pub include_risk_assessment: bool,
    #[serde(default = "default_true")]
    pub include_delay_prediction: bool,
}

impl From<AnalyzeRequest> for AnalyzeReportCommand {
    fn from(req: AnalyzeRequest) -> Self {
        Self {
            text: req.text,
            issue_type: req.issue_type,
            project_data: req.project_data,
            language: Some(req.language),
            include_risk_assessment: req.include_risk_assessment,
            include_delay_prediction: req.include_delay_prediction,
        }
    }
}

/// Body of `POST /analyze-files`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileAnalysisRequest {
    pub file_content: String,
    pub file_type: String,
    pub issue_type: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl From<FileAnalysisRequest> for AnalyzeFileCommand {
    fn from(req: FileAnalysisRequest) -> Self {
        Self {
            file_content: req.file_content,
            file_type: req.file_type,
            issue_type: req.issue_type,
            language: Some(req.language),
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_true() -> bool {
    true
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// `null` until models are loaded.
    pub models: Option<ModelStatus>,
}

impl HealthResponse {
    pub fn new(models: Option<ModelStatus>) -> Self {
        Self {
            status: service_status(models.is_some()).to_string(),
            timestamp: Utc::now(),
            models,
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub models_loaded: usize,
    pub version: String,
}

impl RootResponse {
    pub fn new(models: Option<&ModelStatus>) -> Self {
        Self {
            message: "AI DPR Analysis Service".to_string(),
            status: if models.is_some() { "running" } else { "starting" }.to_string(),
            models_loaded: models.map(|m| m.total_models).unwrap_or(0),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

fn service_status(ready: bool) -> &'static str {
    if ready {
        "healthy"
    } else {
        "starting"
    }
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_ready() -> Self {
        Self {
            code: ErrorCode::EngineNotReady.to_string(),
            message: "Models are still loading".to_string(),
            details: None,
        }
    }

    /// Code and message only.
    pub fn from_domain(error: &DomainError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details: None,
        }
    }

    /// Code, message, and the error's detail map.
    pub fn from_domain_with_details(error: &DomainError) -> Self {
        let details = (!error.details.is_empty())
            .then(|| serde_json::to_value(&error.details).ok())
            .flatten();
        Self {
            details,
            ..Self::from_domain(error)
        }
    }
}

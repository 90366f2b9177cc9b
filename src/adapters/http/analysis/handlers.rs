//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::{
    AnalysisError, AnalyzeFileHandler, AnalyzeReportHandler, EngineGate, GetModelStatusHandler,
};
use crate::domain::foundation::DomainError;

use super::dto::{
    AnalyzeRequest, ErrorResponse, FileAnalysisRequest, HealthResponse, RootResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalysisAppState {
    gate: Arc<EngineGate>,
    analyze_report: Arc<AnalyzeReportHandler>,
    analyze_file: Arc<AnalyzeFileHandler>,
    model_status: Arc<GetModelStatusHandler>,
    verbose_errors: bool,
}

impl AnalysisAppState {
    pub fn new(gate: Arc<EngineGate>) -> Self {
        Self {
            analyze_report: Arc::new(AnalyzeReportHandler::new(Arc::clone(&gate))),
            analyze_file: Arc::new(AnalyzeFileHandler::new(Arc::clone(&gate))),
            model_status: Arc::new(GetModelStatusHandler::new(Arc::clone(&gate))),
            gate,
            verbose_errors: false,
        }
    }

    /// Include error details in 500 responses.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    pub fn gate(&self) -> &Arc<EngineGate> {
        &self.gate
    }

    fn error(&self, error: AnalysisError) -> AnalysisApiError {
        AnalysisApiError {
            error,
            verbose: self.verbose_errors,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

/// An `AnalysisError` rendered as an HTTP response.
#[derive(Debug)]
pub struct AnalysisApiError {
    error: AnalysisError,
    verbose: bool,
}

impl AnalysisApiError {
    pub fn new(error: AnalysisError) -> Self {
        Self {
            error,
            verbose: false,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            AnalysisError::Input(_) => StatusCode::BAD_REQUEST,
            AnalysisError::Computation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AnalysisError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self.error {
            AnalysisError::Input(err) => {
                ErrorResponse::from_domain_with_details(&DomainError::from(err.clone()))
            }
            AnalysisError::Computation(err) => {
                error!(code = %err.code, details = ?err.details, "Analysis failed: {}", err.message);
                if self.verbose {
                    ErrorResponse::from_domain_with_details(err)
                } else {
                    ErrorResponse::from_domain(err)
                }
            }
            AnalysisError::NotReady => ErrorResponse::not_ready(),
        };
        (status, Json(body)).into_response()
    }
}

fn rejection_response(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /analyze - Analyze one status report
pub async fn analyze_report(
    State(state): State<AnalysisAppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.analyze_report.handle(req.into()).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => state.error(e).into_response(),
    }
}

/// POST /analyze-files - Analyze text extracted from an uploaded file
pub async fn analyze_file(
    State(state): State<AnalysisAppState>,
    body: Result<Json<FileAnalysisRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.analyze_file.handle(req.into()).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => state.error(e).into_response(),
    }
}

/// GET /models/status - Strategies backing each slot
pub async fn get_model_status(State(state): State<AnalysisAppState>) -> Response {
    match state.model_status.handle() {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(e) => state.error(e).into_response(),
    }
}

/// GET /health - Liveness plus loaded models
pub async fn health(State(state): State<AnalysisAppState>) -> Json<HealthResponse> {
    let models = state.gate.loaded().map(|loaded| loaded.status.clone());
    Json(HealthResponse::new(models))
}

/// GET / - Service banner
pub async fn root(State(state): State<AnalysisAppState>) -> Json<RootResponse> {
    let models = state.gate.loaded().map(|loaded| &loaded.status);
    Json(RootResponse::new(models))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, ValidationError};

    #[test]
    fn input_error_maps_to_400() {
        let err = AnalysisApiError::new(AnalysisError::Input(ValidationError::empty_field("text")));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn computation_error_maps_to_500() {
        let err = AnalysisApiError::new(AnalysisError::Computation(DomainError::new(
            ErrorCode::NonFiniteFeature,
            "feature was not finite",
        )));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_ready_maps_to_503() {
        let err = AnalysisApiError::new(AnalysisError::NotReady);
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

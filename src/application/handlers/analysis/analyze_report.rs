//! AnalyzeReportHandler - Command handler for analyzing one status report.

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

use crate::application::engine::AnalysisError;
use crate::application::readiness::EngineGate;
use crate::domain::analysis::{AnalysisRequest, AnalysisResult, ProjectMetadata};

/// Command to analyze a report.
#[derive(Debug, Clone)]
pub struct AnalyzeReportCommand {
    pub text: String,
    pub issue_type: String,
    /// Free-form project facts; only the known numeric keys are read.
    pub project_data: Map<String, Value>,
    pub language: Option<String>,
    pub include_risk_assessment: bool,
    pub include_delay_prediction: bool,
}

impl AnalyzeReportCommand {
    pub fn new(text: impl Into<String>, issue_type: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            issue_type: issue_type.into(),
            project_data: Map::new(),
            language: None,
            include_risk_assessment: true,
            include_delay_prediction: true,
        }
    }

    fn into_request(self) -> Result<AnalysisRequest, AnalysisError> {
        let metadata = ProjectMetadata::from_json_map(&self.project_data)?;
        let mut request = AnalysisRequest::new(self.text, &self.issue_type)?
            .with_metadata(metadata)
            .with_risk_assessment(self.include_risk_assessment)
            .with_delay_prediction(self.include_delay_prediction);
        if let Some(language) = self.language {
            request = request.with_language_hint(language);
        }
        Ok(request)
    }
}

/// Handler for report analysis.
pub struct AnalyzeReportHandler {
    gate: Arc<EngineGate>,
}

impl AnalyzeReportHandler {
    pub fn new(gate: Arc<EngineGate>) -> Self {
        Self { gate }
    }

    pub async fn handle(&self, cmd: AnalyzeReportCommand) -> Result<AnalysisResult, AnalysisError> {
        let engine = self.gate.engine()?;
        let request = cmd.into_request()?;

        let result = engine.analyze(&request).await?;
        info!(
            issue_type = %request.issue_type(),
            risk_score = result.risk_score.value(),
            language = %result.language_detected,
            processing_time = result.processing_time,
            "Report analyzed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::{AnalysisEngine, EngineConfig, StrategySet};
    use crate::application::model_loader::{LoadedModels, ModelStatus};
    use serde_json::json;

    fn ready_gate() -> Arc<EngineGate> {
        let strategies = StrategySet::basic();
        Arc::new(EngineGate::ready(LoadedModels {
            status: ModelStatus::from_strategies(&strategies),
            engine: Arc::new(AnalysisEngine::new(strategies, EngineConfig::default())),
        }))
    }

    fn project_data(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn analyzes_with_project_data() {
        let handler = AnalyzeReportHandler::new(ready_gate());
        let mut cmd = AnalyzeReportCommand::new(
            "Land acquisition delayed because of pending court approvals",
            "Land Acquisition",
        );
        cmd.project_data = project_data(json!({ "budget": "2000000", "timeline_days": 20 }));

        let result = handler.handle(cmd).await.unwrap();
        assert!(result.risk_score.value() > 0.7);
        let delay = result.delay_prediction.unwrap();
        assert!(delay.risk_factors.contains(&"Timeline pressure: 20 days".to_string()));
    }

    #[tokio::test]
    async fn blank_text_is_input_error() {
        let handler = AnalyzeReportHandler::new(ready_gate());
        let err = handler
            .handle(AnalyzeReportCommand::new("   ", "Budget Mismatch"))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Input(_)));
    }

    #[tokio::test]
    async fn non_numeric_budget_is_input_error() {
        let handler = AnalyzeReportHandler::new(ready_gate());
        let mut cmd = AnalyzeReportCommand::new("Costs exceeded plan", "Budget Mismatch");
        cmd.project_data = project_data(json!({ "budget": "a lot" }));

        let err = handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Input(_)));
    }

    #[tokio::test]
    async fn optional_sections_can_be_disabled() {
        let handler = AnalyzeReportHandler::new(ready_gate());
        let mut cmd = AnalyzeReportCommand::new("Work continues on schedule", "Delay");
        cmd.include_delay_prediction = false;
        cmd.include_risk_assessment = false;

        let result = handler.handle(cmd).await.unwrap();
        assert!(result.delay_prediction.is_none());
        assert!(result.risk_factors.is_empty());
    }

    #[tokio::test]
    async fn closed_gate_is_not_ready() {
        let handler = AnalyzeReportHandler::new(Arc::new(EngineGate::new()));
        let err = handler
            .handle(AnalyzeReportCommand::new("text", "Delay"))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::NotReady));
    }
}

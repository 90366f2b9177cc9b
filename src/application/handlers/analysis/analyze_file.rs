//! AnalyzeFileHandler - Command handler for extracted file contents.

use std::sync::Arc;
use tracing::info;

use crate::application::engine::AnalysisError;
use crate::application::readiness::EngineGate;
use crate::domain::analysis::{AnalysisRequest, FileAnalysisSummary};

/// Command to analyze the text extracted from an uploaded file.
#[derive(Debug, Clone)]
pub struct AnalyzeFileCommand {
    pub file_content: String,
    pub file_type: String,
    pub issue_type: String,
    pub language: Option<String>,
}

/// Handler for file analysis. Runs the full pipeline with delay prediction off.
pub struct AnalyzeFileHandler {
    gate: Arc<EngineGate>,
}

impl AnalyzeFileHandler {
    pub fn new(gate: Arc<EngineGate>) -> Self {
        Self { gate }
    }

    pub async fn handle(&self, cmd: AnalyzeFileCommand) -> Result<FileAnalysisSummary, AnalysisError> {
        let engine = self.gate.engine()?;

        let mut request = AnalysisRequest::new(cmd.file_content.as_str(), &cmd.issue_type)?
            .with_delay_prediction(false);
        if let Some(language) = cmd.language {
            request = request.with_language_hint(language);
        }

        let result = engine.analyze(&request).await?;
        let char_count = cmd.file_content.chars().count();
        info!(file_type = %cmd.file_type, char_count, "File analyzed");

        Ok(FileAnalysisSummary::from_result(&cmd.file_type, char_count, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::{AnalysisEngine, EngineConfig, StrategySet};
    use crate::application::model_loader::{LoadedModels, ModelStatus};

    fn ready_gate() -> Arc<EngineGate> {
        let strategies = StrategySet::basic();
        Arc::new(EngineGate::ready(LoadedModels {
            status: ModelStatus::from_strategies(&strategies),
            engine: Arc::new(AnalysisEngine::new(strategies, EngineConfig::default())),
        }))
    }

    fn command(content: &str) -> AnalyzeFileCommand {
        AnalyzeFileCommand {
            file_content: content.to_string(),
            file_type: "pdf".to_string(),
            issue_type: "Budget Mismatch".to_string(),
            language: None,
        }
    }

    #[tokio::test]
    async fn summarizes_file() {
        let handler = AnalyzeFileHandler::new(ready_gate());
        let content = "Budget overrun of $250,000 reported on 12/03/2024 with 15% variance";

        let summary = handler.handle(command(content)).await.unwrap();
        assert_eq!(
            summary.file_analysis,
            format!("Processed pdf file with {} characters", content.chars().count())
        );
        assert_eq!(summary.recommendations.len(), 3);
        assert_eq!(summary.entities.len(), 3);
        assert!(summary.extracted_insights.starts_with("AI analysis of Budget Mismatch"));
    }

    #[tokio::test]
    async fn counts_characters_not_bytes() {
        let handler = AnalyzeFileHandler::new(ready_gate());
        let summary = handler.handle(command("परियोजना में देरी")).await.unwrap();
        assert_eq!(summary.file_analysis, "Processed pdf file with 17 characters");
    }

    #[tokio::test]
    async fn empty_content_is_input_error() {
        let handler = AnalyzeFileHandler::new(ready_gate());
        let err = handler.handle(command("")).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Input(_)));
    }
}

//! Report analysis handlers.
//!
//! Each handler resolves the engine through the readiness gate, so every
//! operation fails with `AnalysisError::NotReady` until models are loaded.

mod analyze_file;
mod analyze_report;
mod get_model_status;

pub use analyze_file::{AnalyzeFileCommand, AnalyzeFileHandler};
pub use analyze_report::{AnalyzeReportCommand, AnalyzeReportHandler};
pub use get_model_status::GetModelStatusHandler;

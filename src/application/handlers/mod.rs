//! Application handlers.
//!
//! Command and query handlers that orchestrate the analysis engine.

pub mod analysis;

pub use analysis::{
    AnalyzeFileCommand, AnalyzeFileHandler, AnalyzeReportCommand, AnalyzeReportHandler,
    GetModelStatusHandler,
};

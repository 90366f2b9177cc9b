//! Application layer - the analysis engine, model loading, and handlers.
//!
//! The engine is built once by the `ModelLoader` and published through the
//! `EngineGate`. Handlers resolve it per call.

pub mod engine;
pub mod handlers;
pub mod model_loader;
pub mod readiness;

pub use engine::{AnalysisEngine, AnalysisError, EngineConfig, StrategySet};
pub use handlers::{
    AnalyzeFileCommand, AnalyzeFileHandler, AnalyzeReportCommand, AnalyzeReportHandler,
    GetModelStatusHandler,
};
pub use model_loader::{LoadedModels, ModelLoadError, ModelLoader, ModelStatus};
pub use readiness::EngineGate;

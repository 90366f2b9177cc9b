//! HTTP adapter for report analysis endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalyzeRequest, ErrorResponse, FileAnalysisRequest, HealthResponse, RootResponse,
};
pub use handlers::{AnalysisApiError, AnalysisAppState};
pub use routes::{analysis_router, build_router};

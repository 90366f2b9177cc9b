//! GetModelStatusHandler - Query handler for the loaded model inventory.

use std::sync::Arc;

use crate::application::engine::AnalysisError;
use crate::application::model_loader::ModelStatus;
use crate::application::readiness::EngineGate;

pub struct GetModelStatusHandler {
    gate: Arc<EngineGate>,
}

impl GetModelStatusHandler {
    pub fn new(gate: Arc<EngineGate>) -> Self {
        Self { gate }
    }

    pub fn handle(&self) -> Result<ModelStatus, AnalysisError> {
        self.gate
            .loaded()
            .map(|loaded| loaded.status.clone())
            .ok_or(AnalysisError::NotReady)
    }
}

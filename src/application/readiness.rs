//! EngineGate - publishes the loaded engine exactly once.
//!
//! Requests that arrive before models finish loading are rejected with
//! `AnalysisError::NotReady` rather than queued.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::engine::{AnalysisEngine, AnalysisError};
use super::model_loader::LoadedModels;

/// Readiness gate around the loaded models.
#[derive(Default)]
pub struct EngineGate {
    cell: OnceCell<LoadedModels>,
}

impl EngineGate {
    /// Creates a closed gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gate that is already open.
    pub fn ready(loaded: LoadedModels) -> Self {
        Self {
            cell: OnceCell::new_with(Some(loaded)),
        }
    }

    /// Opens the gate with the output of `init`, running it at most once.
    ///
    /// Concurrent callers wait for the first initialization; a failed
    /// initialization leaves the gate closed so it can be retried.
    pub async fn open_with<F, Fut, E>(&self, init: F) -> Result<&LoadedModels, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<LoadedModels, E>>,
    {
        self.cell.get_or_try_init(init).await
    }

    pub fn is_ready(&self) -> bool {
        self.cell.initialized()
    }

    pub fn loaded(&self) -> Option<&LoadedModels> {
        self.cell.get()
    }

    /// The engine, or `NotReady` while loading.
    pub fn engine(&self) -> Result<Arc<AnalysisEngine>, AnalysisError> {
        self.cell
            .get()
            .map(|loaded| Arc::clone(&loaded.engine))
            .ok_or(AnalysisError::NotReady)
    }
}

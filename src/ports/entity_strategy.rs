//! Entity Strategy Port - the named entity extraction slot.

use async_trait::async_trait;

use super::{ModelUnavailableError, StrategyDescriptor};
use crate::domain::analysis::Entity;

/// Port for extracting named entities from report text.
#[async_trait]
pub trait EntityStrategy: Send + Sync {
    /// Extracts entities in the order the implementation finds them.
    async fn extract(&self, text: &str) -> Result<Vec<Entity>, ModelUnavailableError>;

    /// Identifies the implementation.
    fn descriptor(&self) -> StrategyDescriptor;
}

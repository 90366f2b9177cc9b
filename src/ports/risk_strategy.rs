//! Risk Strategy Port - the risk scoring slot.
//!
//! Risk scoring is pure arithmetic over the feature vector, so the port is
//! synchronous.

use super::{ModelUnavailableError, StrategyDescriptor};
use crate::domain::analysis::{FeatureVector, IssueType};
use crate::domain::foundation::UnitScore;

/// Port for scoring project risk.
pub trait RiskStrategy: Send + Sync {
    /// Final risk for the report, already adjusted for the issue type.
    fn score(
        &self,
        features: &FeatureVector,
        issue: &IssueType,
    ) -> Result<UnitScore, ModelUnavailableError>;

    /// Identifies the implementation.
    fn descriptor(&self) -> StrategyDescriptor;
}

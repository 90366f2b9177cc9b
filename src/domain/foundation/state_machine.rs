//! State machine trait for stage enums.
//!
//! Gives every lifecycle enum the same validated `transition_to` so that
//! callers can never jump over a predecessor state.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list their legal edges; validated transitions come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for AnalysisStage {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.valid_transitions().contains(target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Received => vec![LanguageDetected],
///             // ...
///         }
///     }
/// }
///
/// let stage = stage.transition_to(AnalysisStage::LanguageDetected)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the analysis engine.

mod errors;
mod ids;
mod score;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::AnalysisId;
pub use score::{Polarity, UnitScore};
pub use state_machine::StateMachine;

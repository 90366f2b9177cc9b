//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (scores, IDs, errors, state machine)
//! - `analysis` - Pure domain services for status report analysis
//!   (features, sentiment, entities, risk, delay, recommendations, narrative)

pub mod analysis;
pub mod foundation;

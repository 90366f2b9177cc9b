//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Strategy Ports
//!
//! - `SentimentStrategy` - keyword or classifier sentiment
//! - `EntityStrategy` - regex or token-classification entities
//! - `RiskStrategy` - heuristic or logistic risk
//!
//! Every model-backed call returns `Result<_, ModelUnavailableError>`; the
//! engine decides the substitute.

mod entity_strategy;
mod model_error;
mod risk_strategy;
mod sentiment_strategy;

pub use entity_strategy::EntityStrategy;
pub use model_error::{ModelUnavailableError, StrategyDescriptor, StrategyKind};
pub use risk_strategy::RiskStrategy;
pub use sentiment_strategy::SentimentStrategy;

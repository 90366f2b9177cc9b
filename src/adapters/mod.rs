//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `nlp` - Sentiment, entity and risk strategies (rule-based, hosted, logistic)
//! - `http` - REST API over the analysis handlers

pub mod http;
pub mod nlp;

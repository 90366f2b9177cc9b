//! Shared failure type and descriptors for analysis strategies.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from a model-backed strategy.
///
/// The engine never surfaces these to callers; each one triggers the
/// documented substitute for its slot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelUnavailableError {
    /// Endpoint could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Endpoint answered with a non-success status.
    #[error("model endpoint returned {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body or reason.
        message: String,
    },

    /// Response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Model ran but produced an unusable value.
    #[error("invalid model output: {0}")]
    InvalidOutput(String),

    /// Inputs could not be fed to the model.
    #[error("invalid model input: {0}")]
    InvalidInput(String),
}

/// Which implementation family fills a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Keyword, regex or heuristic rules.
    Basic,
    /// Pretrained or fixed-parameter model.
    Advanced,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Basic => write!(f, "basic"),
            StrategyKind::Advanced => write!(f, "advanced"),
        }
    }
}

/// Identity of a strategy, used for logging and the model status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyDescriptor {
    pub kind: StrategyKind,
    /// Short implementation name, e.g. `keyword` or `remote-classifier`.
    pub name: String,
}

impl StrategyDescriptor {
    pub fn basic(name: impl Into<String>) -> Self {
        Self {
            kind: StrategyKind::Basic,
            name: name.into(),
        }
    }

    pub fn advanced(name: impl Into<String>) -> Self {
        Self {
            kind: StrategyKind::Advanced,
            name: name.into(),
        }
    }

    pub fn is_advanced(&self) -> bool {
        self.kind == StrategyKind::Advanced
    }
}

//! Model configuration

use secrecy::Secret;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Where the advanced strategies find their models
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsConfig {
    /// Hosted sentiment classifier endpoint
    pub sentiment_endpoint: Option<String>,

    /// Hosted token-classification endpoint
    pub ner_endpoint: Option<String>,

    /// Bearer token for the hosted endpoints
    pub api_token: Option<Secret<String>>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Logistic risk model parameters (.yaml, .yml or .json)
    pub risk_model_path: Option<PathBuf>,

    /// Fail startup instead of degrading when an endpoint is unreachable
    #[serde(default)]
    pub require_advanced: bool,
}

impl ModelsConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if any hosted endpoint is configured
    pub fn has_endpoints(&self) -> bool {
        [&self.sentiment_endpoint, &self.ner_endpoint]
            .iter()
            .any(|e| e.as_ref().is_some_and(|url| !url.is_empty()))
    }

    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for endpoint in [&self.sentiment_endpoint, &self.ner_endpoint]
            .into_iter()
            .flatten()
        {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ValidationError::InvalidEndpoint(endpoint.clone()));
            }
        }

        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidModelTimeout);
        }

        if self.require_advanced && !self.has_endpoints() {
            return Err(ValidationError::MissingRequired("MODELS__SENTIMENT_ENDPOINT"));
        }

        Ok(())
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            sentiment_endpoint: None,
            ner_endpoint: None,
            api_token: None,
            timeout_secs: default_timeout(),
            risk_model_path: None,
            require_advanced: false,
        }
    }
}

fn default_timeout() -> u64 {
    10
}

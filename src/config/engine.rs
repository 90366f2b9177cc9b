//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::nlp::DEFAULT_MAX_INPUT_CHARS;
use crate::domain::analysis::DelayModel;

/// Tunables for the analysis pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Delay table (`standard` or `graduated`)
    #[serde(default)]
    pub delay_model: DelayModel,

    /// Characters of text sent to hosted models
    #[serde(default = "default_max_model_input_chars")]
    pub max_model_input_chars: usize,
}

impl EngineSettings {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=DEFAULT_MAX_INPUT_CHARS).contains(&self.max_model_input_chars) {
            return Err(ValidationError::InvalidMaxInputChars);
        }
        Ok(())
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            delay_model: DelayModel::default(),
            max_model_input_chars: default_max_model_input_chars(),
        }
    }
}

fn default_max_model_input_chars() -> usize {
    DEFAULT_MAX_INPUT_CHARS
}

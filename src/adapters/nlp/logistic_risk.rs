//! Logistic Risk - fixed-parameter classifier implementation of RiskStrategy.
//!
//! The model standardizes the five model inputs with stored means and
//! scales, applies a weighted sum plus bias, and squashes through the
//! logistic function. The result is then scaled by the issue multiplier.
//!
//! Parameters ship with built-in defaults and may be replaced by a YAML or
//! JSON file:
//!
//! ```yaml
//! weights: [-0.2, 0.0, 0.4, 0.6, -0.8]
//! bias: -0.3
//! means: [150.0, 8.0, 3.0, 5.0, 0.5]
//! scales: [100.0, 5.0, 3.0, 10.0, 0.5]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::analysis::{FeatureVector, IssueType, RiskCalculator, MODEL_INPUT_DIMENSION};
use crate::domain::foundation::UnitScore;
use crate::ports::{ModelUnavailableError, RiskStrategy, StrategyDescriptor};

/// Index of the scaled budget input.
const BUDGET_INPUT: usize = 3;
/// Index of the scaled timeline input.
const TIMELINE_INPUT: usize = 4;

/// Errors loading or validating model parameters.
#[derive(Debug, Error)]
pub enum RiskModelError {
    #[error("failed to read risk model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in risk model: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON in risk model: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported risk model format '{0}', expected .yaml, .yml or .json")]
    UnsupportedFormat(String),

    #[error("invalid risk model parameters: {0}")]
    Invalid(String),
}

/// Parameters of the logistic risk model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskModelParams {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
}

impl Default for RiskModelParams {
    fn default() -> Self {
        Self {
            weights: vec![-0.2, 0.0, 0.4, 0.6, -0.8],
            bias: -0.3,
            means: vec![150.0, 8.0, 3.0, 5.0, 0.5],
            scales: vec![100.0, 5.0, 3.0, 10.0, 0.5],
        }
    }
}

impl RiskModelParams {
    /// Loads parameters from a `.yaml`, `.yml` or `.json` file and validates them.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RiskModelError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RiskModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&contents),
            "json" => Self::from_json_str(&contents),
            other => Err(RiskModelError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, RiskModelError> {
        let params: Self = serde_yaml::from_str(contents)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, RiskModelError> {
        let params: Self = serde_json::from_str(contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks dimensions, finiteness, positive scales, and the sign
    /// constraints that keep risk non-decreasing in budget and
    /// non-increasing in timeline.
    pub fn validate(&self) -> Result<(), RiskModelError> {
        for (name, values) in [
            ("weights", &self.weights),
            ("means", &self.means),
            ("scales", &self.scales),
        ] {
            if values.len() != MODEL_INPUT_DIMENSION {
                return Err(RiskModelError::Invalid(format!(
                    "{} has {} entries, expected {}",
                    name,
                    values.len(),
                    MODEL_INPUT_DIMENSION
                )));
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(RiskModelError::Invalid(format!("{} contains a non-finite value", name)));
            }
        }

        if !self.bias.is_finite() {
            return Err(RiskModelError::Invalid("bias is not finite".into()));
        }
        if self.scales.iter().any(|s| *s <= 0.0) {
            return Err(RiskModelError::Invalid("scales must be positive".into()));
        }
        if self.weights[BUDGET_INPUT] < 0.0 {
            return Err(RiskModelError::Invalid("budget weight must not be negative".into()));
        }
        if self.weights[TIMELINE_INPUT] > 0.0 {
            return Err(RiskModelError::Invalid("timeline weight must not be positive".into()));
        }

        Ok(())
    }

    /// Logistic probability for raw (unscaled) inputs.
    pub fn probability(&self, inputs: &[f64]) -> Result<f64, ModelUnavailableError> {
        if inputs.len() != self.weights.len() {
            return Err(ModelUnavailableError::InvalidInput(format!(
                "expected {} inputs, got {}",
                self.weights.len(),
                inputs.len()
            )));
        }
        if let Some(position) = inputs.iter().position(|v| !v.is_finite()) {
            return Err(ModelUnavailableError::InvalidInput(format!(
                "input {} is not finite",
                position
            )));
        }

        let z = inputs
            .iter()
            .zip(&self.means)
            .zip(&self.scales)
            .zip(&self.weights)
            .map(|(((x, mean), scale), weight)| weight * (x - mean) / scale)
            .sum::<f64>()
            + self.bias;

        let p = 1.0 / (1.0 + (-z).exp());
        if p.is_finite() {
            Ok(p)
        } else {
            Err(ModelUnavailableError::InvalidOutput("probability is not finite".into()))
        }
    }
}

/// Risk from the logistic model, scaled by the issue multiplier.
pub struct LogisticRiskStrategy {
    params: RiskModelParams,
}

impl LogisticRiskStrategy {
    /// Wraps already validated parameters.
    pub fn new(params: RiskModelParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RiskModelParams {
        &self.params
    }
}

impl Default for LogisticRiskStrategy {
    fn default() -> Self {
        Self::new(RiskModelParams::default())
    }
}

impl RiskStrategy for LogisticRiskStrategy {
    fn score(
        &self,
        features: &FeatureVector,
        issue: &IssueType,
    ) -> Result<UnitScore, ModelUnavailableError> {
        let inputs = RiskCalculator::model_inputs(features);
        let base = self.params.probability(&inputs)?;
        Ok(RiskCalculator::apply_issue_multiplier(base, issue))
    }

    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor::advanced("logistic")
    }
}

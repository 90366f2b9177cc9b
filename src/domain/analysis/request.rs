//! Analysis request - validated input to the pipeline.

use serde_json::{Map, Value};

use super::IssueType;
use crate::domain::foundation::ValidationError;

/// Default project budget when the metadata omits it.
pub const DEFAULT_BUDGET: f64 = 100_000.0;
/// Default planned duration in days.
pub const DEFAULT_TIMELINE_DAYS: f64 = 90.0;
/// Default team headcount.
pub const DEFAULT_TEAM_SIZE: f64 = 5.0;
/// Default complexity on a 1-10 scale.
pub const DEFAULT_COMPLEXITY: f64 = 3.0;

/// Structured project facts that accompany a report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectMetadata {
    pub budget: f64,
    pub timeline_days: f64,
    pub team_size: f64,
    pub complexity: f64,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            timeline_days: DEFAULT_TIMELINE_DAYS,
            team_size: DEFAULT_TEAM_SIZE,
            complexity: DEFAULT_COMPLEXITY,
        }
    }
}

impl ProjectMetadata {
    /// Reads the known keys out of a free-form JSON object.
    ///
    /// Values may be JSON numbers or numeric strings. Missing keys and
    /// `null` take their defaults; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when a known key holds something that is not a
    /// finite number.
    pub fn from_json_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            budget: numeric_field(map, "budget", DEFAULT_BUDGET)?,
            timeline_days: numeric_field(map, "timeline_days", DEFAULT_TIMELINE_DAYS)?,
            team_size: numeric_field(map, "team_size", DEFAULT_TEAM_SIZE)?,
            complexity: numeric_field(map, "complexity", DEFAULT_COMPLEXITY)?,
        })
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_timeline_days(mut self, days: f64) -> Self {
        self.timeline_days = days;
        self
    }

    pub fn with_team_size(mut self, team_size: f64) -> Self {
        self.team_size = team_size;
        self
    }

    pub fn with_complexity(mut self, complexity: f64) -> Self {
        self.complexity = complexity;
        self
    }
}

fn numeric_field(map: &Map<String, Value>, key: &str, default: f64) -> Result<f64, ValidationError> {
    let parsed = match map.get(key) {
        None | Some(Value::Null) => return Ok(default),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::invalid_format(key, "expected a finite number")),
    }
}

/// A validated request to analyze one status report.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    text: String,
    issue_type: IssueType,
    metadata: ProjectMetadata,
    language_hint: String,
    include_risk_assessment: bool,
    include_delay_prediction: bool,
}

impl AnalysisRequest {
    /// Creates a request with default metadata and both optional sections on.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` when the text or the issue type is blank.
    pub fn new(text: impl Into<String>, issue_type: &str) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        if issue_type.trim().is_empty() {
            return Err(ValidationError::empty_field("issue_type"));
        }

        Ok(Self {
            text,
            issue_type: IssueType::parse(issue_type),
            metadata: ProjectMetadata::default(),
            language_hint: "en".to_string(),
            include_risk_assessment: true,
            include_delay_prediction: true,
        })
    }

    pub fn with_metadata(mut self, metadata: ProjectMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_language_hint(mut self, language: impl Into<String>) -> Self {
        self.language_hint = language.into();
        self
    }

    pub fn with_risk_assessment(mut self, include: bool) -> Self {
        self.include_risk_assessment = include;
        self
    }

    pub fn with_delay_prediction(mut self, include: bool) -> Self {
        self.include_delay_prediction = include;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn issue_type(&self) -> &IssueType {
        &self.issue_type
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    /// Caller-supplied language; informational only, detection does not use it.
    pub fn language_hint(&self) -> &str {
        &self.language_hint
    }

    pub fn include_risk_assessment(&self) -> bool {
        self.include_risk_assessment
    }

    pub fn include_delay_prediction(&self) -> bool {
        self.include_delay_prediction
    }
}

//! AnalysisStage enum for tracking progress through one analysis run.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Stage of a single analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    #[default]
    Received,
    LanguageDetected,
    FeaturesExtracted,
    Scored,
    DelayPredicted,
    Assembled,
    Completed,
}

impl StateMachine for AnalysisStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Valid transitions:
    /// - Received -> LanguageDetected -> FeaturesExtracted -> Scored
    /// - Scored -> DelayPredicted | Assembled
    /// - DelayPredicted -> Assembled -> Completed
    fn valid_transitions(&self) -> Vec<Self> {
        use AnalysisStage::*;
        match self {
            Received => vec![LanguageDetected],
            LanguageDetected => vec![FeaturesExtracted],
            FeaturesExtracted => vec![Scored],
            Scored => vec![DelayPredicted, Assembled],
            DelayPredicted => vec![Assembled],
            Assembled => vec![Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalysisStage::Received => "received",
            AnalysisStage::LanguageDetected => "language_detected",
            AnalysisStage::FeaturesExtracted => "features_extracted",
            AnalysisStage::Scored => "scored",
            AnalysisStage::DelayPredicted => "delay_predicted",
            AnalysisStage::Assembled => "assembled",
            AnalysisStage::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

/// Ordered record of the stages a run has entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineTrace {
    stages: Vec<AnalysisStage>,
}

impl PipelineTrace {
    /// Starts a trace at `Received`.
    pub fn new() -> Self {
        Self {
            stages: vec![AnalysisStage::Received],
        }
    }

    /// Current stage.
    pub fn current(&self) -> AnalysisStage {
        self.stages
            .last()
            .copied()
            .unwrap_or(AnalysisStage::Received)
    }

    /// Moves to `next`, rejecting any edge the stage machine does not allow.
    pub fn advance(&mut self, next: AnalysisStage) -> Result<AnalysisStage, ValidationError> {
        let stage = self.current().transition_to(next)?;
        self.stages.push(stage);
        Ok(stage)
    }

    /// Whether the run ever entered `stage`.
    pub fn entered(&self, stage: AnalysisStage) -> bool {
        self.stages.contains(&stage)
    }

    pub fn stages(&self) -> &[AnalysisStage] {
        &self.stages
    }
}

impl Default for PipelineTrace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AnalysisStage::*;

    #[test]
    fn default_is_received() {
        assert_eq!(AnalysisStage::default(), Received);
    }

    #[test]
    fn scored_may_skip_delay() {
        assert!(Scored.can_transition_to(&DelayPredicted));
        assert!(Scored.can_transition_to(&Assembled));
    }

    #[test]
    fn cannot_skip_required_stages() {
        assert!(!Received.can_transition_to(&FeaturesExtracted));
        assert!(!LanguageDetected.can_transition_to(&Scored));
        assert!(!FeaturesExtracted.can_transition_to(&Assembled));
        assert!(!DelayPredicted.can_transition_to(&Completed));
    }

    #[test]
    fn completed_is_terminal() {
        assert!(Completed.is_terminal());
        assert!(!Assembled.is_terminal());
    }

    #[test]
    fn trace_records_full_run() {
        let mut trace = PipelineTrace::new();
        for stage in [LanguageDetected, FeaturesExtracted, Scored, DelayPredicted, Assembled, Completed] {
            trace.advance(stage).unwrap();
        }
        assert_eq!(trace.current(), Completed);
        assert_eq!(trace.stages().len(), 7);
        assert!(trace.entered(DelayPredicted));
    }

    #[test]
    fn trace_without_delay() {
        let mut trace = PipelineTrace::new();
        for stage in [LanguageDetected, FeaturesExtracted, Scored, Assembled, Completed] {
            trace.advance(stage).unwrap();
        }
        assert!(!trace.entered(DelayPredicted));
    }

    #[test]
    fn trace_rejects_illegal_edge() {
        let mut trace = PipelineTrace::new();
        let err = trace.advance(Scored).unwrap_err();
        assert_eq!(err.field(), "state_transition");
        assert_eq!(trace.current(), Received);
    }

    #[test]
    fn displays_snake_case() {
        assert_eq!(DelayPredicted.to_string(), "delay_predicted");
    }
}

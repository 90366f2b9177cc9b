//! Bounded score value objects.
//!
//! `UnitScore` carries every score the engine reports on a 0..=1 scale;
//! `Polarity` carries the signed sentiment score on a -1..=1 scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A finite value between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitScore(f64);

impl UnitScore {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// One.
    pub const ONE: Self = Self(1.0);

    /// Creates a score, clamping to the valid range. NaN becomes zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a score, returning an error for NaN, infinities or values
    /// outside 0..=1.
    pub fn try_new(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(field, 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for UnitScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for UnitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A finite signed value between -1.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polarity(f64);

impl Polarity {
    /// Neutral polarity.
    pub const NEUTRAL: Self = Self(0.0);

    /// Creates a polarity, clamping to the valid range. NaN becomes neutral.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(-1.0, 1.0))
    }

    /// Creates a polarity, returning an error for non-finite or out of range values.
    pub fn try_new(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(field, -1.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Magnitude regardless of direction.
    pub fn strength(&self) -> f64 {
        self.0.abs()
    }
}

impl Default for Polarity {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_score_new_clamps() {
        assert_eq!(UnitScore::new(1.4).value(), 1.0);
        assert_eq!(UnitScore::new(-0.2).value(), 0.0);
        assert_eq!(UnitScore::new(0.35).value(), 0.35);
    }

    #[test]
    fn unit_score_new_maps_nan_to_zero() {
        assert_eq!(UnitScore::new(f64::NAN), UnitScore::ZERO);
    }

    #[test]
    fn unit_score_try_new_rejects_out_of_range() {
        assert!(UnitScore::try_new("risk_score", 1.01).is_err());
        assert!(UnitScore::try_new("risk_score", f64::INFINITY).is_err());
        assert!(UnitScore::try_new("risk_score", f64::NAN).is_err());
        assert!(UnitScore::try_new("risk_score", 0.0).is_ok());
        assert!(UnitScore::try_new("risk_score", 1.0).is_ok());
    }

    #[test]
    fn unit_score_try_new_reports_field() {
        match UnitScore::try_new("compliance_score", 2.0) {
            Err(ValidationError::OutOfRange { field, .. }) => assert_eq!(field, "compliance_score"),
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn unit_score_displays_two_decimals() {
        assert_eq!(UnitScore::new(0.456).to_string(), "0.46");
    }

    #[test]
    fn polarity_clamps_and_reports_strength() {
        assert_eq!(Polarity::new(-3.0).value(), -1.0);
        assert_eq!(Polarity::new(-0.4).strength(), 0.4);
        assert_eq!(Polarity::new(f64::NAN), Polarity::NEUTRAL);
    }

    #[test]
    fn polarity_try_new_rejects_out_of_range() {
        assert!(Polarity::try_new("sentiment_score", -1.2).is_err());
        assert!(Polarity::try_new("sentiment_score", -1.0).is_ok());
    }

    #[test]
    fn scores_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&UnitScore::new(0.5)).unwrap();
        assert_eq!(json, "0.5");
        let json = serde_json::to_string(&Polarity::new(-0.25)).unwrap();
        assert_eq!(json, "-0.25");
    }
}

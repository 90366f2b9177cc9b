//! Derived report scores.

use crate::domain::foundation::{Polarity, UnitScore};

/// Clearer sentiment gives higher confidence: `0.8 + |s| * 0.15`.
pub fn confidence_score(sentiment: Polarity) -> UnitScore {
    UnitScore::new(0.8 + sentiment.strength() * 0.15)
}

/// Longer reports read as more complete: `min(0.5 + words / 200, 1)`.
pub fn completeness_score(word_count: f64) -> UnitScore {
    UnitScore::new((0.5 + word_count / 200.0).min(1.0))
}

/// Compliance falls with risk but never below 0.4: `max(0.9 - risk * 0.3, 0.4)`.
pub fn compliance_score(risk: UnitScore) -> UnitScore {
    UnitScore::new((0.9 - risk.value() * 0.3).max(0.4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_grows_with_sentiment_strength() {
        assert!((confidence_score(Polarity::NEUTRAL).value() - 0.8).abs() < 1e-9);
        assert!((confidence_score(Polarity::new(-1.0)).value() - 0.95).abs() < 1e-9);
        assert_eq!(
            confidence_score(Polarity::new(0.5)),
            confidence_score(Polarity::new(-0.5))
        );
    }

    #[test]
    fn completeness_caps_at_one() {
        assert_eq!(completeness_score(0.0).value(), 0.5);
        assert!((completeness_score(40.0).value() - 0.7).abs() < 1e-9);
        assert_eq!(completeness_score(100.0).value(), 1.0);
        assert_eq!(completeness_score(5000.0).value(), 1.0);
    }

    #[test]
    fn compliance_has_floor() {
        assert!((compliance_score(UnitScore::ZERO).value() - 0.9).abs() < 1e-9);
        assert!((compliance_score(UnitScore::ONE).value() - 0.6).abs() < 1e-9);
        assert!(compliance_score(UnitScore::ONE).value() >= 0.4);
    }
}

//! Feature extraction - the fixed numeric view of a report used by the
//! risk and delay scorers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::ProjectMetadata;

static SENTENCE_TERMINATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));

static TECHNICAL_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(budget|timeline|resource|risk|compliance|deadline|milestone)\b")
        .expect("valid technical term regex")
});

/// Numeric features derived from report text and project metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub word_count: f64,
    pub sentence_count: f64,
    pub avg_word_length: f64,
    pub technical_terms: f64,
    pub budget_size: f64,
    pub timeline_days: f64,
    pub team_size: f64,
    pub complexity_score: f64,
    pub budget_per_day: f64,
    pub words_per_sentence: f64,
}

impl FeatureVector {
    /// Features in their canonical order, by name.
    pub fn named(&self) -> [(&'static str, f64); 10] {
        [
            ("word_count", self.word_count),
            ("sentence_count", self.sentence_count),
            ("avg_word_length", self.avg_word_length),
            ("technical_terms", self.technical_terms),
            ("budget_size", self.budget_size),
            ("timeline_days", self.timeline_days),
            ("team_size", self.team_size),
            ("complexity_score", self.complexity_score),
            ("budget_per_day", self.budget_per_day),
            ("words_per_sentence", self.words_per_sentence),
        ]
    }

    /// Name of the first non-finite feature, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        self.named()
            .into_iter()
            .find(|(_, v)| !v.is_finite())
            .map(|(name, _)| name)
    }
}

/// Derives the feature vector for a report.
///
/// Sentence count is the number of pieces left after splitting on runs of
/// `.`, `!` or `?`, so a trailing terminator contributes an empty piece and
/// empty text counts as one sentence.
pub fn extract_features(text: &str, metadata: &ProjectMetadata) -> FeatureVector {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len() as f64;
    let sentence_count = (SENTENCE_TERMINATORS.find_iter(text).count() + 1) as f64;

    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        total_chars as f64 / word_count
    };

    let technical_terms = TECHNICAL_TERMS.find_iter(text).count() as f64;

    FeatureVector {
        word_count,
        sentence_count,
        avg_word_length,
        technical_terms,
        budget_size: metadata.budget,
        timeline_days: metadata.timeline_days,
        team_size: metadata.team_size,
        complexity_score: metadata.complexity,
        budget_per_day: metadata.budget / metadata.timeline_days.max(1.0),
        words_per_sentence: word_count / sentence_count.max(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_and_sentences() {
        let f = extract_features("Budget is tight. Timeline slipped!", &ProjectMetadata::default());
        assert_eq!(f.word_count, 5.0);
        // "Budget is tight", " Timeline slipped", ""
        assert_eq!(f.sentence_count, 3.0);
    }

    #[test]
    fn runs_of_terminators_count_once() {
        let f = extract_features("Really?! Yes...", &ProjectMetadata::default());
        assert_eq!(f.sentence_count, 3.0);
    }

    #[test]
    fn empty_text_does_not_divide_by_zero() {
        let f = extract_features("", &ProjectMetadata::default());
        assert_eq!(f.word_count, 0.0);
        assert_eq!(f.sentence_count, 1.0);
        assert_eq!(f.avg_word_length, 0.0);
        assert_eq!(f.words_per_sentence, 0.0);
        assert!(f.first_non_finite().is_none());
    }

    #[test]
    fn average_word_length_uses_characters() {
        let f = extract_features("ab abcd", &ProjectMetadata::default());
        assert_eq!(f.avg_word_length, 3.0);
    }

    #[test]
    fn technical_terms_are_whole_word_and_case_insensitive() {
        let f = extract_features(
            "BUDGET and Timeline risk; budgets and riskier do not count. Milestone deadline.",
            &ProjectMetadata::default(),
        );
        assert_eq!(f.technical_terms, 5.0);
    }

    #[test]
    fn metadata_flows_into_features() {
        let meta = ProjectMetadata::default()
            .with_budget(900_000.0)
            .with_timeline_days(30.0)
            .with_team_size(12.0)
            .with_complexity(9.0);
        let f = extract_features("text", &meta);

        assert_eq!(f.budget_size, 900_000.0);
        assert_eq!(f.timeline_days, 30.0);
        assert_eq!(f.team_size, 12.0);
        assert_eq!(f.complexity_score, 9.0);
        assert_eq!(f.budget_per_day, 30_000.0);
    }

    #[test]
    fn zero_timeline_floors_denominator_at_one() {
        let meta = ProjectMetadata::default().with_timeline_days(0.0);
        let f = extract_features("text", &meta);
        assert_eq!(f.budget_per_day, 100_000.0);
    }

    #[test]
    fn named_preserves_canonical_order() {
        let f = extract_features("a b", &ProjectMetadata::default());
        let names: Vec<&str> = f.named().iter().map(|(n, _)| *n).collect();
        assert_eq!(names[0], "word_count");
        assert_eq!(names[9], "words_per_sentence");
    }

    #[test]
    fn reports_non_finite_feature() {
        let meta = ProjectMetadata::default().with_budget(f64::INFINITY);
        let f = extract_features("text", &meta);
        assert_eq!(f.first_non_finite(), Some("budget_size"));
    }
}

//! Script-based language detection.

/// Language tag returned when no Indic script is present.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Scripts checked in priority order; the first script with any character
/// present in the text decides the tag.
const SCRIPT_TABLE: &[(&str, char, char)] = &[
    ("hi", '\u{0900}', '\u{097F}'), // Devanagari
    ("te", '\u{0C00}', '\u{0C7F}'), // Telugu
    ("ta", '\u{0B80}', '\u{0BFF}'), // Tamil
    ("bn", '\u{0980}', '\u{09FF}'), // Bengali
];

/// Classifies the text's script into a language tag.
///
/// Priority is by script, not by position: a text containing both Tamil and
/// Devanagari characters is tagged `hi` no matter which comes first.
pub fn detect_language(text: &str) -> &'static str {
    SCRIPT_TABLE
        .iter()
        .find(|(_, lo, hi)| text.chars().any(|c| (*lo..=*hi).contains(&c)))
        .map(|(tag, _, _)| *tag)
        .unwrap_or(DEFAULT_LANGUAGE)
}

//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Use hosted sentiment and entity models when configured
    #[serde(default = "default_true")]
    pub enable_advanced_nlp: bool,

    /// Use the logistic risk model instead of the heuristic
    #[serde(default = "default_true")]
    pub enable_model_risk: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_advanced_nlp: true,
            enable_model_risk: true,
            verbose_errors: false,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_advanced_nlp);
        assert!(flags.enable_model_risk);
        assert!(!flags.verbose_errors);
    }

    #[test]
    fn test_serde_defaults_match_default_impl() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert!(flags.enable_advanced_nlp);
        assert!(flags.enable_model_risk);
        assert!(!flags.verbose_errors);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "enable_advanced_nlp": false,
            "enable_model_risk": false,
            "verbose_errors": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.enable_advanced_nlp);
        assert!(!flags.enable_model_risk);
        assert!(flags.verbose_errors);
    }
}

//! Validation engine configuration

use serde::{Deserialize, Serialize};

/// Maximum length used when a field's type carries no length metadata
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Deepest level of nested input groups the engine descends into
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Tunables for the validation engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Integer-part bound for fields without a length spec (e.g. `date`)
    #[serde(default = "default_max_length")]
    pub default_max_length: usize,

    /// Maximum nesting depth of input groups; deeper groups are rejected
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Pass the field's length spec into the type-check pattern instead of
    /// matching with unbounded repetition
    #[serde(default)]
    pub bounded_patterns: bool,
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_max_length: DEFAULT_MAX_LENGTH,
            max_depth: DEFAULT_MAX_DEPTH,
            bounded_patterns: false,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bound used when a field has no length spec
    pub fn with_default_max_length(mut self, max: usize) -> Self {
        self.default_max_length = max;
        self
    }

    /// Set the maximum nesting depth of input groups
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable length-bounded type-check patterns
    pub fn with_bounded_patterns(mut self, bounded: bool) -> Self {
        self.bounded_patterns = bounded;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.default_max_length, 20);
        assert_eq!(config.max_depth, 32);
        assert!(!config.bounded_patterns);
    }

    #[test]
    fn test_builder() {
        let config = ValidatorConfig::new()
            .with_default_max_length(64)
            .with_max_depth(2)
            .with_bounded_patterns(true);
        assert_eq!(config.default_max_length, 64);
        assert_eq!(config.max_depth, 2);
        assert!(config.bounded_patterns);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: ValidatorConfig = serde_json::from_str(r#"{"max_depth": 4}"#).unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.default_max_length, DEFAULT_MAX_LENGTH);
    }
}

//! Validation result

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Verdict and per-field messages of one validation pass.
///
/// `valid` starts out `true` and only ever flips to `false`. A field may
/// collect several messages (null, length and type checks all run).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// Record a failed check for `field`
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.valid = false;
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Messages for one field, empty when it passed or was never checked
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of messages across all fields
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// First message of every failing field, for display next to each input
    pub fn first_errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().filter_map(|(field, messages)| {
            messages
                .first()
                .map(|message| (field.as_str(), message.as_str()))
        })
    }
}

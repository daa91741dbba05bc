//! Matcher descriptions

use super::PatternError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed matcher for date fields: three groups of two to four digits
pub const DATE_PATTERN: &str = r"^[0-9]{2,4}-[0-9]{2,4}-[0-9]{2,4}$";

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(DATE_PATTERN).unwrap());

/// Start/end anchoring of a matcher
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Anchors {
    pub start: bool,
    pub finish: bool,
}

impl Anchors {
    pub const NONE: Anchors = Anchors {
        start: false,
        finish: false,
    };
    pub const BOTH: Anchors = Anchors {
        start: true,
        finish: true,
    };
}

/// Bounds for a decimal value: integer digits, then an optional fraction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecimalBounds {
    pub int_min: usize,
    pub int_max: usize,
    pub frac_min: usize,
    pub frac_max: usize,
}

/// Repetition clause following the character class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Repetition {
    /// No quantifier: exactly one character
    Single,
    /// `*`
    Unbounded,
    /// `{n}`
    Exact(usize),
    /// `{min,max}`
    Range { min: usize, max: usize },
    /// `{int_min,int_max}(\.[0-9]{frac_min,frac_max})?`
    Decimal(DecimalBounds),
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repetition::Single => Ok(()),
            Repetition::Unbounded => f.write_str("*"),
            Repetition::Exact(n) => write!(f, "{{{n}}}"),
            Repetition::Range { min, max } => write!(f, "{{{min},{max}}}"),
            Repetition::Decimal(b) => write!(
                f,
                r"{{{},{}}}(\.[0-9]{{{},{}}})?",
                b.int_min, b.int_max, b.frac_min, b.frac_max
            ),
        }
    }
}

/// Compiled-matcher description for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSpec {
    /// The fixed [`DATE_PATTERN`]
    Date,
    /// `[class]` + repetition, optionally anchored
    Class {
        /// Class body without the surrounding brackets
        class: String,
        repetition: Repetition,
        anchors: Anchors,
    },
}

impl MatchSpec {
    /// Regular expression source for this matcher
    pub fn pattern(&self) -> String {
        match self {
            MatchSpec::Date => DATE_PATTERN.to_string(),
            MatchSpec::Class {
                class,
                repetition,
                anchors,
            } => {
                let mut pattern = String::new();
                if anchors.start {
                    pattern.push('^');
                }
                pattern.push('[');
                pattern.push_str(class);
                pattern.push(']');
                pattern.push_str(&repetition.to_string());
                if anchors.finish {
                    pattern.push('$');
                }
                pattern
            }
        }
    }

    pub fn compile(&self) -> Result<Regex, PatternError> {
        if let MatchSpec::Date = self {
            return Ok(DATE_REGEX.clone());
        }
        let pattern = self.pattern();
        Regex::new(&pattern).map_err(|source| PatternError::Compile { pattern, source })
    }

    /// Test a value against this matcher
    pub fn is_match(&self, value: &str) -> Result<bool, PatternError> {
        match self {
            MatchSpec::Date => Ok(DATE_REGEX.is_match(value)),
            MatchSpec::Class { .. } => Ok(self.compile()?.is_match(value)),
        }
    }
}

impl fmt::Display for MatchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern())
    }
}

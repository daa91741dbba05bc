//! Pattern builder
//!
//! Composes a [`MatchSpec`] from a semantic type, an optional length rule,
//! anchoring and extra permitted characters. Building is pure: the same
//! arguments always give the same matcher.

use super::spec::{Anchors, DecimalBounds, MatchSpec, Repetition};
use crate::models::{FieldDescriptor, LengthSpec, SemanticType};
use serde::{Deserialize, Serialize};

const WORD_CLASS: &str = "a-zA-Z0-9 ";
const DECIMAL_CLASS: &str = r"\.0-9";
const DIGIT_CLASS: &str = "0-9";

const VARCHAR_EXTRA_CHARS: &[char] = &['-', ':', '_'];
const EMAIL_EXTRA_CHARS: &[char] = &['-', ':', '_', '@', '.'];

/// Length parameters for the repetition clause
///
/// Acceptable combinations mirror the repetition precedence in
/// [`PatternBuilder::build`]; any field may be left unset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LengthRule {
    #[serde(default)]
    pub min: Option<usize>,
    #[serde(default)]
    pub max: Option<usize>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub decimal: Option<DecimalBounds>,
}

impl LengthRule {
    /// Derive a rule from a normalized length spec.
    ///
    /// Required fields need at least one character (one integer digit and,
    /// when a fraction is given, one fraction digit).
    pub fn from_length_spec(spec: &LengthSpec, nullable: bool) -> Self {
        match *spec {
            LengthSpec::Max(max) => Self {
                min: (!nullable).then_some(1.min(max)),
                max: Some(max),
                nullable,
                decimal: None,
            },
            LengthSpec::Decimal {
                integer_digits,
                fraction_digits,
            } => Self {
                min: None,
                max: None,
                nullable,
                decimal: Some(DecimalBounds {
                    int_min: 1.min(integer_digits),
                    int_max: integer_digits,
                    frac_min: 1.min(fraction_digits),
                    frac_max: fraction_digits,
                }),
            },
        }
    }

    fn repetition(&self) -> Repetition {
        match (self.nullable, self.min, self.max, self.decimal) {
            (true, _, Some(max), _) => Repetition::Range { min: 0, max },
            (_, Some(min), Some(max), _) => Repetition::Range { min, max },
            (_, _, Some(max), _) => Repetition::Exact(max),
            (true, _, None, Some(bounds)) => Repetition::Decimal(DecimalBounds {
                int_min: 0,
                ..bounds
            }),
            (false, _, None, Some(bounds)) => Repetition::Decimal(bounds),
            _ => Repetition::Single,
        }
    }
}

/// Builder for per-field matchers
pub struct PatternBuilder;

impl PatternBuilder {
    /// Build a matcher.
    ///
    /// `Date` always yields the fixed date matcher regardless of the other
    /// arguments. Every other type starts from its base class, appends
    /// `extra_chars` in order, then adds the repetition clause (`*` when no
    /// length rule is given) and the requested anchors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_form_validator::models::SemanticType;
    /// use schema_form_validator::pattern::{Anchors, PatternBuilder};
    ///
    /// let spec = PatternBuilder::build(SemanticType::Varchar, None, Anchors::BOTH, &[]);
    /// assert_eq!(spec.pattern(), "^[a-zA-Z0-9 ]*$");
    /// ```
    pub fn build(
        semantic_type: SemanticType,
        length: Option<&LengthRule>,
        anchors: Anchors,
        extra_chars: &[char],
    ) -> MatchSpec {
        let base = match semantic_type {
            SemanticType::Date => return MatchSpec::Date,
            SemanticType::Varchar | SemanticType::VarcharExtra | SemanticType::EmailFormat => {
                WORD_CLASS
            }
            SemanticType::Decimal => DECIMAL_CLASS,
            SemanticType::Generic => DIGIT_CLASS,
        };

        let mut class = String::from(base);
        for c in extra_chars {
            class.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }

        let repetition = length.map_or(Repetition::Unbounded, LengthRule::repetition);

        MatchSpec::Class {
            class,
            repetition,
            anchors,
        }
    }

    /// Build the type-check matcher for a field.
    ///
    /// Anchors and extra characters come from the field's semantic type; the
    /// length rule is passed through unchanged.
    pub fn for_field(field: &FieldDescriptor, length: Option<&LengthRule>) -> MatchSpec {
        let extra_chars: &[char] = match field.semantic_type {
            SemanticType::VarcharExtra => VARCHAR_EXTRA_CHARS,
            SemanticType::EmailFormat => EMAIL_EXTRA_CHARS,
            _ => &[],
        };
        Self::build(field.semantic_type, length, Anchors::BOTH, extra_chars)
    }
}

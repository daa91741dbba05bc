//! Field model for the SDK

use super::enums::SemanticType;
use serde::{Deserialize, Serialize};

/// Length or precision bound extracted from a schema type string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LengthSpec {
    /// Single maximum, e.g. `varchar(45)` -> `Max(45)`
    Max(usize),
    /// Decimal precision split into integer and fraction digits.
    ///
    /// `decimal(8,2)` -> `Decimal { integer_digits: 6, fraction_digits: 2 }`
    Decimal {
        integer_digits: usize,
        fraction_digits: usize,
    },
}

impl LengthSpec {
    /// Build a decimal spec from total precision and scale.
    ///
    /// The integer-part bound is `precision - scale`, saturating at zero.
    pub fn from_precision(precision: usize, scale: usize) -> Self {
        LengthSpec::Decimal {
            integer_digits: precision.saturating_sub(scale),
            fraction_digits: scale,
        }
    }

    /// Bound for the part of a value before the first `.`
    pub fn integer_bound(&self) -> usize {
        match self {
            LengthSpec::Max(max) => *max,
            LengthSpec::Decimal { integer_digits, .. } => *integer_digits,
        }
    }

    /// Bound for the part after the first `.`, only defined for decimals
    pub fn fraction_bound(&self) -> Option<usize> {
        match self {
            LengthSpec::Max(_) => None,
            LengthSpec::Decimal {
                fraction_digits, ..
            } => Some(*fraction_digits),
        }
    }
}

/// Normalized metadata for one table column
///
/// # Example
///
/// ```rust
/// use schema_form_validator::models::{FieldDescriptor, LengthSpec, SemanticType};
///
/// let field = FieldDescriptor::new(
///     "first_name",
///     SemanticType::Varchar,
///     Some(LengthSpec::Max(45)),
///     false,
/// );
/// assert_eq!(field.display_name, "First Name");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column name, matches the submitted input key
    pub name: String,
    /// Human-friendly label used in error messages
    pub display_name: String,
    /// Semantic category driving the type check
    pub semantic_type: SemanticType,
    /// Length/precision bound, absent when the type carries none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<LengthSpec>,
    /// Whether empty values are permitted
    #[serde(default = "default_true")]
    pub nullable: bool,
}

fn default_true() -> bool {
    true
}

impl FieldDescriptor {
    pub fn new(
        name: impl Into<String>,
        semantic_type: SemanticType,
        length: Option<LengthSpec>,
        nullable: bool,
    ) -> Self {
        let name = name.into();
        Self {
            display_name: display_name(&name),
            name,
            semantic_type,
            length,
            nullable,
        }
    }
}

/// Pretty version of a column name for error message display.
///
/// Splits on `_`, uppercases the first letter of every token and joins the
/// tokens with a space. The rest of each token is left untouched.
pub fn display_name(field: &str) -> String {
    field
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("vin_number"), "Vin Number");
        assert_eq!(display_name("make"), "Make");
        assert_eq!(display_name("created_date_time"), "Created Date Time");
        assert_eq!(display_name("mixedCase_id"), "MixedCase Id");
    }

    #[test]
    fn test_display_name_keeps_empty_tokens() {
        assert_eq!(display_name("a__b"), "A  B");
        assert_eq!(display_name("_id"), " Id");
    }

    #[test]
    fn test_from_precision_subtracts_scale() {
        let spec = LengthSpec::from_precision(8, 2);
        assert_eq!(spec.integer_bound(), 6);
        assert_eq!(spec.fraction_bound(), Some(2));
    }

    #[test]
    fn test_from_precision_saturates() {
        let spec = LengthSpec::from_precision(2, 4);
        assert_eq!(spec.integer_bound(), 0);
        assert_eq!(spec.fraction_bound(), Some(4));
    }

    #[test]
    fn test_max_has_no_fraction_bound() {
        assert_eq!(LengthSpec::Max(45).integer_bound(), 45);
        assert_eq!(LengthSpec::Max(45).fraction_bound(), None);
    }
}

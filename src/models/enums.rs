//! Enums shared by the SDK models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category a column is classified into.
///
/// The tag decides which character class and repetition rule the pattern
/// builder produces for a field. Raw schema type names that are not listed
/// here (e.g. `int`, `text`, `tinyint`) map to [`SemanticType::Generic`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// Numeric-ish default: digits only
    #[default]
    Generic,
    /// Letters, digits and spaces
    Varchar,
    /// Varchar plus hyphen, colon and underscore
    VarcharExtra,
    /// Varchar extras plus at-sign and dot
    EmailFormat,
    /// Three hyphen-separated digit groups
    Date,
    /// Digits and a decimal point
    Decimal,
}

impl SemanticType {
    /// Map a raw schema type name (the part of `Type` before any `(`).
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_form_validator::models::SemanticType;
    ///
    /// assert_eq!(SemanticType::from_type_name("varchar"), SemanticType::Varchar);
    /// assert_eq!(SemanticType::from_type_name("DECIMAL"), SemanticType::Decimal);
    /// assert_eq!(SemanticType::from_type_name("int"), SemanticType::Generic);
    /// ```
    pub fn from_type_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "varchar" => SemanticType::Varchar,
            "varchar_extra" => SemanticType::VarcharExtra,
            "email_format" => SemanticType::EmailFormat,
            "date" => SemanticType::Date,
            "decimal" => SemanticType::Decimal,
            _ => SemanticType::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Generic => "generic",
            SemanticType::Varchar => "varchar",
            SemanticType::VarcharExtra => "varchar_extra",
            SemanticType::EmailFormat => "email_format",
            SemanticType::Date => "date",
            SemanticType::Decimal => "decimal",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

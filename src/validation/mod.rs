//! Validation functionality
//!
//! Provides the input validation engine:
//! - HTML-escaping of submitted values before any check
//! - Null, length and type checks per field
//! - Recursion into nested input groups

pub mod engine;
pub mod result;
pub mod sanitize;

pub use engine::{InputValidator, validate, value_lengths};
pub use result::ValidationResult;
pub use sanitize::escape_html;

/// Error during a single field check
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Field '{field}' is not part of table '{table}'")]
    UnknownField { table: String, field: String },
}

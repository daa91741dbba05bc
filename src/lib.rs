//! Schema Form Validator - validates untrusted form input against a table schema
//!
//! Provides:
//! - Schema normalization from table-description rows
//! - Per-field pattern construction from semantic types and length bounds
//! - Validation of flat or nested form input with per-field error messages
//! - Configuration for the validator and the description-query collaborator

pub mod config;
pub mod import;
pub mod models;
pub mod pattern;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigError, DatabaseSettings, Settings, ValidatorConfig};
pub use import::{DescribeImporter, DescribeRow, SchemaError, normalize};
pub use pattern::{Anchors, LengthRule, MatchSpec, PatternBuilder, PatternError};
pub use validation::{InputValidator, ValidationError, ValidationResult, validate};

// Re-export models
pub use models::{FieldDescriptor, FormInput, InputValue, LengthSpec, SemanticType, TableSchema};

//! Validation engine
//!
//! Runs the null, length and type checks for every submitted value whose key
//! exists in the table schema. Failures are collected into a
//! [`ValidationResult`]; nothing short-circuits, so every field is checked
//! and a field can collect several messages.

use super::ValidationError;
use super::result::ValidationResult;
use super::sanitize::escape_html;
use crate::config::ValidatorConfig;
use crate::models::{FieldDescriptor, FormInput, InputValue, SemanticType, TableSchema};
use crate::pattern::{LengthRule, PatternBuilder};
use tracing::{debug, warn};

/// Validator bound to one table schema
///
/// The schema is borrowed, never copied or mutated, so a single schema can
/// serve many validators at once. Each call to [`InputValidator::validate`]
/// returns its own result.
///
/// # Example
///
/// ```rust
/// use schema_form_validator::import::{DescribeRow, normalize};
/// use schema_form_validator::models::{FormInput, InputValue};
/// use schema_form_validator::validation::InputValidator;
///
/// let schema = normalize("vehicle", &[DescribeRow::new("make", "varchar(45)", "NO")]).unwrap();
/// let mut inputs = FormInput::new();
/// inputs.insert("make".to_string(), InputValue::from("Ford"));
///
/// let result = InputValidator::new(&schema).validate(&inputs);
/// assert!(result.is_valid());
/// ```
pub struct InputValidator<'a> {
    schema: &'a TableSchema,
    config: ValidatorConfig,
}

impl<'a> InputValidator<'a> {
    pub fn new(schema: &'a TableSchema) -> Self {
        Self {
            schema,
            config: ValidatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn schema(&self) -> &TableSchema {
        self.schema
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate submitted input into a fresh result
    pub fn validate(&self, inputs: &FormInput) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.validate_into(inputs, &mut result);
        result
    }

    /// Validate submitted input, accumulating into a caller-held result
    pub fn validate_into(&self, inputs: &FormInput, result: &mut ValidationResult) {
        self.validate_group(inputs, 0, result);
        debug!(
            "Validated {} inputs against table {}: valid={}, {} errors",
            inputs.len(),
            self.schema.table(),
            result.valid,
            result.error_count()
        );
    }

    fn validate_group(&self, inputs: &FormInput, depth: usize, result: &mut ValidationResult) {
        for (key, value) in inputs {
            match value {
                InputValue::Group(group) => {
                    if depth >= self.config.max_depth {
                        let key = escape_html(key);
                        warn!("Input group '{}' exceeds maximum depth {}", key, self.config.max_depth);
                        result.add_error(
                            &key,
                            format!(
                                "\"{}\" input nesting exceeds maximum depth of {}",
                                key, self.config.max_depth
                            ),
                        );
                        continue;
                    }
                    self.validate_group(group, depth + 1, result);
                }
                InputValue::Scalar(raw) => {
                    let value = escape_html(raw);
                    let Some(field) = self.schema.get(key) else {
                        continue;
                    };
                    null_check(field, &value, result);
                    self.length_check(field, &value, result);
                    self.type_check(field, &value, result);
                }
            }
        }
    }

    /// Null check for a single, already escaped value
    pub fn check_null(
        &self,
        key: &str,
        value: &str,
        result: &mut ValidationResult,
    ) -> Result<(), ValidationError> {
        null_check(self.field(key)?, value, result);
        Ok(())
    }

    /// Length check for a single, already escaped value
    pub fn check_length(
        &self,
        key: &str,
        value: &str,
        result: &mut ValidationResult,
    ) -> Result<(), ValidationError> {
        self.length_check(self.field(key)?, value, result);
        Ok(())
    }

    /// Type check for a single, already escaped value
    pub fn check_data_type(
        &self,
        key: &str,
        value: &str,
        result: &mut ValidationResult,
    ) -> Result<(), ValidationError> {
        self.type_check(self.field(key)?, value, result);
        Ok(())
    }

    /// Integer-part bound and, for decimals, fraction bound of a field
    pub fn max_length(&self, field: &FieldDescriptor) -> (usize, Option<usize>) {
        match &field.length {
            Some(spec) => (spec.integer_bound(), spec.fraction_bound()),
            None => (self.config.default_max_length, None),
        }
    }

    fn field(&self, key: &str) -> Result<&FieldDescriptor, ValidationError> {
        self.schema
            .get(key)
            .ok_or_else(|| ValidationError::UnknownField {
                table: self.schema.table().to_string(),
                field: key.to_string(),
            })
    }

    fn length_check(&self, field: &FieldDescriptor, value: &str, result: &mut ValidationResult) {
        let (int_len, frac_len) = value_lengths(value);
        let (int_max, frac_max) = self.max_length(field);

        if int_len > int_max {
            debug!("Field '{}' integer part too long: {} > {}", field.name, int_len, int_max);
            result.add_error(
                &field.name,
                format!(
                    "Value in \"{}\" field is too long ({}) - maximum character limit is {}",
                    field.display_name, value, int_max
                ),
            );
        }

        if let (Some(frac_len), Some(frac_max)) = (frac_len, frac_max)
            && frac_len > frac_max
        {
            debug!("Field '{}' fraction too long: {} > {}", field.name, frac_len, frac_max);
            result.add_error(
                &field.name,
                format!(
                    "Value in \"{}\" field is too long ({}) - maximum character limit after the decimal place is {}",
                    field.display_name, value, frac_max
                ),
            );
        }
    }

    fn type_check(&self, field: &FieldDescriptor, value: &str, result: &mut ValidationResult) {
        let rule = if self.config.bounded_patterns {
            field
                .length
                .map(|spec| LengthRule::from_length_spec(&spec, field.nullable))
        } else {
            None
        };
        let spec = PatternBuilder::for_field(field, rule.as_ref());

        let matched = spec.is_match(value).unwrap_or_else(|e| {
            warn!("Rejecting value for field '{}': {}", field.name, e);
            false
        });
        if matched {
            return;
        }

        debug!("Field '{}' failed pattern {}", field.name, spec);
        let message = match field.semantic_type {
            SemanticType::Date => format!(
                "\"{}\" field is not formatted properly or contains invalid characters. ex: yyyy-mm-dd",
                field.display_name
            ),
            _ => format!("\"{}\" field contains invalid characters", field.display_name),
        };
        result.add_error(&field.name, message);
    }
}

fn null_check(field: &FieldDescriptor, value: &str, result: &mut ValidationResult) {
    if value.is_empty() && !field.nullable {
        result.add_error(
            &field.name,
            format!(
                "\"{}\" field must have a value: cannot be left blank",
                field.display_name
            ),
        );
    }
}

/// Character counts of the text before the first `.` and, when present, of
/// the text between the first and second `.`
pub fn value_lengths(value: &str) -> (usize, Option<usize>) {
    let mut parts = value.split('.');
    let int_len = parts.next().map_or(0, |part| part.chars().count());
    let frac_len = parts.next().map(|part| part.chars().count());
    (int_len, frac_len)
}

/// Validate submitted input against a schema with the default configuration
pub fn validate(inputs: &FormInput, schema: &TableSchema) -> ValidationResult {
    InputValidator::new(schema).validate(inputs)
}

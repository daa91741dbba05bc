//! Table description import
//!
//! Normalizes `DESCRIBE`-style rows: the `Type` column is split into a
//! semantic type tag and a length/precision bound, `Null` becomes a
//! nullability flag and `Field` gets a display name for error messages.

use super::{DescribeRow, SchemaError};
use crate::models::{FieldDescriptor, LengthSpec, SemanticType, TableSchema};
use tracing::{debug, info};

/// Importer for the description rows of a single table
pub struct DescribeImporter {
    /// Table the rows describe
    pub table: String,
}

impl DescribeImporter {
    /// Create an importer for the given table
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
        }
    }

    /// Normalize already-decoded rows
    pub fn normalize(&self, rows: &[DescribeRow]) -> Result<TableSchema, SchemaError> {
        normalize(&self.table, rows)
    }

    /// Parse a JSON array of description rows and normalize it
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_form_validator::import::DescribeImporter;
    ///
    /// let json = r#"[{"Field": "make", "Type": "varchar(45)", "Null": "NO"}]"#;
    /// let schema = DescribeImporter::new("vehicle").parse_json(json).unwrap();
    /// assert!(schema.contains("make"));
    /// ```
    pub fn parse_json(&self, content: &str) -> Result<TableSchema, SchemaError> {
        let rows: Vec<DescribeRow> = serde_json::from_str(content)?;
        self.normalize(&rows)
    }

    /// Parse a YAML sequence of description rows and normalize it
    pub fn parse_yaml(&self, content: &str) -> Result<TableSchema, SchemaError> {
        let rows: Vec<DescribeRow> = serde_yaml::from_str(content)?;
        self.normalize(&rows)
    }
}

/// Build a [`TableSchema`] from description rows.
///
/// An empty result set means the table does not exist (or has no columns),
/// which is reported as [`SchemaError::NoFields`] rather than producing a
/// schema that would let every input through.
pub fn normalize(table: &str, rows: &[DescribeRow]) -> Result<TableSchema, SchemaError> {
    if rows.is_empty() {
        return Err(SchemaError::NoFields {
            table: table.to_string(),
        });
    }

    let fields = rows.iter().map(|row| {
        FieldDescriptor::new(
            row.field.clone(),
            semantic_type(&row.type_name),
            length(&row.type_name),
            is_nullable(&row.null),
        )
    });
    let schema = TableSchema::new(table, fields)?;

    info!("Normalized {} fields for table {}", schema.len(), table);
    Ok(schema)
}

/// Semantic type from the part of a type string before any `(`
pub fn semantic_type(type_name: &str) -> SemanticType {
    let raw = type_name.split('(').next().unwrap_or_default();
    SemanticType::from_type_name(raw)
}

/// Length bound from the text between the first `(` and the last `)`.
///
/// `varchar(45)` gives `Max(45)`, `decimal(8,2)` gives six integer digits and
/// two fraction digits. Types without a parenthesized group, or whose group is
/// not numeric (`enum('a','b')`), have no bound.
pub fn length(type_name: &str) -> Option<LengthSpec> {
    let open = type_name.find('(')?;
    let close = type_name.rfind(')')?;
    if close <= open {
        return None;
    }
    let inner = type_name[open + 1..close].trim();

    let spec = match inner.split_once(',') {
        Some((precision, scale)) => {
            match (precision.trim().parse::<usize>(), scale.trim().parse::<usize>()) {
                (Ok(precision), Ok(scale)) => Some(LengthSpec::from_precision(precision, scale)),
                _ => None,
            }
        }
        None => inner.parse::<usize>().ok().map(LengthSpec::Max),
    };

    if spec.is_none() {
        debug!("No numeric length in type '{}'", type_name);
    }
    spec
}

/// Only an explicit `NO` marks a column as required
pub fn is_nullable(null: &str) -> bool {
    !null.trim().eq_ignore_ascii_case("NO")
}

//! Table schema model for the SDK

use super::enums::SemanticType;
use super::field::FieldDescriptor;
use super::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalized description of one table: field descriptors keyed by name.
///
/// A schema always holds at least one field and field names are unique.
/// The validation engine only ever borrows it, so one schema can back any
/// number of concurrent validation calls.
///
/// # Example
///
/// ```rust
/// use schema_form_validator::models::{FieldDescriptor, LengthSpec, SemanticType, TableSchema};
///
/// let schema = TableSchema::new(
///     "vehicle",
///     vec![FieldDescriptor::new("make", SemanticType::Varchar, Some(LengthSpec::Max(45)), false)],
/// )
/// .unwrap();
/// assert!(schema.contains("make"));
/// ```
///
/// Serialized as a table name plus a list of fields, sorted by name.
/// Deserialization goes through [`TableSchema::new`] and fails the same way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(into = "RawTableSchema", try_from = "RawTableSchema")]
pub struct TableSchema {
    table: String,
    fields: HashMap<String, FieldDescriptor>,
}

#[derive(Serialize, Deserialize)]
struct RawTableSchema {
    table: String,
    fields: Vec<FieldDescriptor>,
}

impl TryFrom<RawTableSchema> for TableSchema {
    type Error = SchemaError;

    fn try_from(raw: RawTableSchema) -> Result<Self, Self::Error> {
        TableSchema::new(raw.table, raw.fields)
    }
}

impl From<TableSchema> for RawTableSchema {
    fn from(schema: TableSchema) -> Self {
        let mut fields: Vec<FieldDescriptor> = schema.fields.into_values().collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            table: schema.table,
            fields,
        }
    }
}

impl TableSchema {
    /// Create a schema from field descriptors.
    ///
    /// Fails with [`SchemaError::NoFields`] when `fields` is empty and with
    /// [`SchemaError::DuplicateField`] when two descriptors share a name.
    pub fn new(
        table: impl Into<String>,
        fields: impl IntoIterator<Item = FieldDescriptor>,
    ) -> Result<Self, SchemaError> {
        let table = table.into();
        let mut by_name = HashMap::new();

        for field in fields {
            if by_name.contains_key(&field.name) {
                return Err(SchemaError::DuplicateField {
                    table,
                    field: field.name,
                });
            }
            by_name.insert(field.name.clone(), field);
        }

        if by_name.is_empty() {
            return Err(SchemaError::NoFields { table });
        }

        Ok(Self {
            table,
            fields: by_name,
        })
    }

    /// Override the inferred semantic type of one field.
    ///
    /// Schema type names never produce `varchar_extra` or `email_format`, so
    /// this is how a plain `varchar` column opts into those rules.
    pub fn with_semantic_type(
        mut self,
        field: &str,
        semantic_type: SemanticType,
    ) -> Result<Self, SchemaError> {
        match self.fields.get_mut(field) {
            Some(descriptor) => {
                descriptor.semantic_type = semantic_type;
                Ok(self)
            }
            None => Err(SchemaError::UnknownField {
                table: self.table,
                field: field.to_string(),
            }),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn get(&self, field: &str) -> Option<&FieldDescriptor> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LengthSpec;

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, SemanticType::Varchar, Some(LengthSpec::Max(10)), true)
    }

    #[test]
    fn test_new_rejects_empty_field_set() {
        let err = TableSchema::new("vehicle", Vec::new()).unwrap_err();
        assert!(matches!(err, SchemaError::NoFields { ref table } if table == "vehicle"));
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let err = TableSchema::new("vehicle", vec![field("make"), field("make")]).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { ref field, .. } if field == "make"));
    }

    #[test]
    fn test_lookup() {
        let schema = TableSchema::new("vehicle", vec![field("make"), field("model")]).unwrap();
        assert_eq!(schema.table(), "vehicle");
        assert_eq!(schema.len(), 2);
        assert!(schema.contains("model"));
        assert!(!schema.contains("colour"));
        assert_eq!(schema.get("make").unwrap().display_name, "Make");
    }

    #[test]
    fn test_with_semantic_type() {
        let schema = TableSchema::new("users", vec![field("email")])
            .unwrap()
            .with_semantic_type("email", SemanticType::EmailFormat)
            .unwrap();
        assert_eq!(
            schema.get("email").unwrap().semantic_type,
            SemanticType::EmailFormat
        );
    }

    #[test]
    fn test_with_semantic_type_unknown_field() {
        let err = TableSchema::new("users", vec![field("email")])
            .unwrap()
            .with_semantic_type("phone", SemanticType::VarcharExtra)
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownField { .. }));
    }

    #[test]
    fn test_serde_uses_field_list() {
        let schema = TableSchema::new("vehicle", vec![field("model"), field("make")]).unwrap();
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["table"], "vehicle");
        assert_eq!(json["fields"][0]["name"], "make");
        assert_eq!(json["fields"][1]["name"], "model");

        let decoded: TableSchema = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, schema);
    }

    #[test]
    fn test_deserialize_rejects_empty_schema() {
        let err = serde_json::from_str::<TableSchema>(r#"{"table":"t","fields":[]}"#).unwrap_err();
        assert!(err.to_string().contains("no fields to validate against"));

        assert!(serde_json::from_str::<TableSchema>(r#"{"table":"t","fields":{}}"#).is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_fields() {
        let doc = serde_json::json!({
            "table": "vehicle",
            "fields": [field("make"), field("make")],
        });
        let err = serde_json::from_value::<TableSchema>(doc).unwrap_err();
        assert!(err.to_string().contains("appears more than once"));
    }
}

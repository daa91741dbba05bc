//! Schema construction errors

/// Error while building or decoding a [`TableSchema`](super::TableSchema)
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Table '{table}' has no fields to validate against; select a valid table to describe")]
    NoFields { table: String },
    #[error("Field '{field}' appears more than once in table '{table}'")]
    DuplicateField { table: String, field: String },
    #[error("Field '{field}' does not exist in table '{table}'")]
    UnknownField { table: String, field: String },
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::ParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for SchemaError {
    fn from(err: serde_yaml::Error) -> Self {
        SchemaError::ParseError(err.to_string())
    }
}

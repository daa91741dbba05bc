//! Import functionality
//!
//! Turns the rows returned by a table-description query (`DESCRIBE table`)
//! into a [`TableSchema`](crate::models::TableSchema). Running the query is
//! left to the caller; this module only consumes its result set, either as
//! typed rows or as a JSON/YAML document.

pub mod describe;

use serde::{Deserialize, Serialize};

pub use crate::models::SchemaError;

/// One row of a table-description result set.
///
/// Column names follow the MySQL `DESCRIBE` output. `Key`, `Default` and
/// `Extra` are carried through but play no part in validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DescribeRow {
    #[serde(rename = "Field")]
    pub field: String,
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(rename = "Null")]
    pub null: String,
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "Default", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(rename = "Extra", default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl DescribeRow {
    pub fn new(
        field: impl Into<String>,
        type_name: impl Into<String>,
        null: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            type_name: type_name.into(),
            null: null.into(),
            key: None,
            default: None,
            extra: None,
        }
    }
}

pub use describe::{DescribeImporter, normalize};

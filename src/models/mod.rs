//! Models module for the SDK
//!
//! Defines the schema and input structures shared by the normalizer, the
//! pattern builder and the validation engine.

pub mod enums;
pub mod error;
pub mod field;
pub mod input;
pub mod table;

pub use enums::SemanticType;
pub use error::SchemaError;
pub use field::{FieldDescriptor, LengthSpec, display_name};
pub use input::{FormInput, InputValue, form_input_from_json};
pub use table::TableSchema;

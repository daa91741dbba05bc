//! Submitted form input
//!
//! Form submissions are either plain values or groups of values (array-style
//! field names such as `vehicles[0][make]`). Groups nest to any depth; the
//! validation engine decides how deep it is willing to go.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level submitted key/value mapping
pub type FormInput = BTreeMap<String, InputValue>;

/// One submitted value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum InputValue {
    Scalar(String),
    Group(BTreeMap<String, InputValue>),
}

impl InputValue {
    /// Convert a decoded JSON document into form input.
    ///
    /// Strings are kept as-is, numbers and booleans use their JSON text,
    /// `null` becomes an empty value, arrays become groups keyed by index.
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => InputValue::Scalar(String::new()),
            Value::Bool(b) => InputValue::Scalar(b.to_string()),
            Value::Number(n) => InputValue::Scalar(n.to_string()),
            Value::String(s) => InputValue::Scalar(s),
            Value::Array(items) => InputValue::Group(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| (idx.to_string(), InputValue::from_json(item)))
                    .collect(),
            ),
            Value::Object(map) => InputValue::Group(
                map.into_iter()
                    .map(|(key, item)| (key, InputValue::from_json(item)))
                    .collect(),
            ),
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            InputValue::Scalar(s) => Some(s),
            InputValue::Group(_) => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, InputValue::Group(_))
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Scalar(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::Scalar(value)
    }
}

impl From<FormInput> for InputValue {
    fn from(value: FormInput) -> Self {
        InputValue::Group(value)
    }
}

/// Build form input from a JSON object.
///
/// Returns `None` when the document is not an object, since a submission is
/// always a mapping at the top level.
pub fn form_input_from_json(value: serde_json::Value) -> Option<FormInput> {
    match InputValue::from_json(value) {
        InputValue::Group(map) => Some(map),
        InputValue::Scalar(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(InputValue::from_json(json!("abc")), InputValue::from("abc"));
        assert_eq!(InputValue::from_json(json!(12.5)), InputValue::from("12.5"));
        assert_eq!(InputValue::from_json(json!(true)), InputValue::from("true"));
        assert_eq!(InputValue::from_json(json!(null)), InputValue::from(""));
    }

    #[test]
    fn test_from_json_arrays_are_indexed_groups() {
        let value = InputValue::from_json(json!([{"make": "Ford"}, {"make": "Audi"}]));
        let InputValue::Group(group) = value else {
            panic!("Expected group");
        };
        assert_eq!(group.len(), 2);
        assert!(group["0"].is_group());
        assert!(group.contains_key("1"));
    }

    #[test]
    fn test_form_input_from_json_requires_object() {
        assert!(form_input_from_json(json!("nope")).is_none());
        let form = form_input_from_json(json!({"make": "Ford"})).unwrap();
        assert_eq!(form["make"].as_scalar(), Some("Ford"));
    }

    #[test]
    fn test_untagged_deserialization() {
        let form: FormInput =
            serde_json::from_str(r#"{"make": "Ford", "owner": {"first_name": "Ann"}}"#).unwrap();
        assert_eq!(form["make"], InputValue::from("Ford"));
        assert!(form["owner"].is_group());
    }
}

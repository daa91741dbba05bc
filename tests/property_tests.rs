//! Property-based tests for the validation engine.
//!
//! Covers the null, length and decimal bounds for arbitrary sizes, the
//! handling of unknown keys and the independence of repeated calls.

use proptest::prelude::*;
use schema_form_validator::models::{
    FieldDescriptor, FormInput, InputValue, LengthSpec, SemanticType, TableSchema,
};
use schema_form_validator::validation::{InputValidator, validate};

fn single_field(field: FieldDescriptor) -> TableSchema {
    TableSchema::new("t", vec![field]).unwrap()
}

fn one_input(key: &str, value: String) -> FormInput {
    let mut inputs = FormInput::new();
    inputs.insert(key.to_string(), InputValue::Scalar(value));
    inputs
}

proptest! {
    /// Required fields reject empty values and accept any non-empty word.
    #[test]
    fn test_required_field_blank_property(value in "[a-zA-Z0-9 ]{1,20}") {
        let schema = single_field(FieldDescriptor::new("name", SemanticType::Varchar, None, false));

        let blank = validate(&one_input("name", String::new()), &schema);
        prop_assert!(!blank.is_valid());
        prop_assert_eq!(
            blank.errors_for("name"),
            ["\"Name\" field must have a value: cannot be left blank"]
        );

        let filled = validate(&one_input("name", value), &schema);
        prop_assert!(filled
            .errors_for("name")
            .iter()
            .all(|m| !m.contains("cannot be left blank")));
    }

    /// A value of exactly N characters passes the length check; N + 1 fails
    /// naming N.
    #[test]
    fn test_single_bound_property(max in 1usize..60) {
        let schema = single_field(FieldDescriptor::new(
            "code",
            SemanticType::Generic,
            Some(LengthSpec::Max(max)),
            false,
        ));

        let exact = validate(&one_input("code", "7".repeat(max)), &schema);
        prop_assert!(exact.is_valid());

        let over = validate(&one_input("code", "7".repeat(max + 1)), &schema);
        let expected = format!(
            "Value in \"Code\" field is too long ({}) - maximum character limit is {}",
            "7".repeat(max + 1),
            max
        );
        prop_assert_eq!(over.errors_for("code"), [expected]);
    }

    /// Fractions of exactly `scale` digits pass; one more fails with the
    /// decimal-place message.
    #[test]
    fn test_decimal_fraction_property(scale in 1usize..8, extra in 1usize..8) {
        let precision = scale + extra;
        let schema = single_field(FieldDescriptor::new(
            "amount",
            SemanticType::Decimal,
            Some(LengthSpec::from_precision(precision, scale)),
            true,
        ));

        let exact = format!("{}.{}", "1".repeat(extra), "5".repeat(scale));
        prop_assert!(validate(&one_input("amount", exact), &schema).is_valid());

        let over = format!("1.{}", "5".repeat(scale + 1));
        let result = validate(&one_input("amount", over.clone()), &schema);
        let expected = format!(
            "Value in \"Amount\" field is too long ({over}) - maximum character limit after the decimal place is {scale}"
        );
        prop_assert_eq!(result.errors_for("amount"), [expected]);
    }

    /// Keys missing from the schema never produce errors.
    #[test]
    fn test_unknown_keys_property(key in "[a-z]{1,12}", value in ".{0,30}") {
        prop_assume!(key != "known");
        let schema = single_field(FieldDescriptor::new("known", SemanticType::Date, None, false));

        let result = validate(&one_input(&key, value), &schema);
        prop_assert!(result.is_valid());
        prop_assert!(result.errors.is_empty());
    }

    /// Independent calls with identical input give identical results.
    #[test]
    fn test_idempotence_property(
        values in proptest::collection::btree_map("[a-c]", ".{0,25}", 0..4)
    ) {
        let schema = TableSchema::new(
            "t",
            vec![
                FieldDescriptor::new("a", SemanticType::Varchar, Some(LengthSpec::Max(10)), false),
                FieldDescriptor::new("b", SemanticType::Decimal, Some(LengthSpec::from_precision(5, 2)), true),
                FieldDescriptor::new("c", SemanticType::EmailFormat, None, false),
            ],
        )
        .unwrap();
        let inputs: FormInput = values
            .into_iter()
            .map(|(k, v)| (k, InputValue::Scalar(v)))
            .collect();

        let validator = InputValidator::new(&schema);
        prop_assert_eq!(validator.validate(&inputs), validator.validate(&inputs));
    }
}

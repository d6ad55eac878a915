// Copyright 2025 Cowboy AI, LLC.

//! Stateless field-level checks
//!
//! Each check takes the value and a field label used in the error message.
//! Absence is modelled with `Option`, so "absent" and "present but empty"
//! stay distinct. The presence checks hand back the unwrapped value for the
//! checks that follow.

use crate::errors::ValidationError;

/// Fail when the value is absent
pub fn not_null<T>(value: Option<T>, field_name: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| {
        ValidationError::new(field_name, format!("{field_name} should not be null"))
    })
}

/// Fail when the value is absent, empty, or whitespace only
pub fn not_null_or_empty<'a>(
    value: Option<&'a str>,
    field_name: &str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ValidationError::new(
            field_name,
            format!("{field_name} should not be empty or null"),
        )),
    }
}

/// Fail when the value has fewer than `min` characters
pub fn min_length(value: &str, min: usize, field_name: &str) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::new(
            field_name,
            format!("{field_name} should be at least {min} characters long"),
        ));
    }
    Ok(())
}

/// Fail when the value has more than `max` characters
pub fn max_length(value: &str, max: usize, field_name: &str) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(
            field_name,
            format!(
                "{field_name} should be less or equal {} characters long",
                group_thousands(max)
            ),
        ));
    }
    Ok(())
}

/// Render a bound with `,` between each group of three digits
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn not_null_ok() {
        let value = not_null(Some("Smartphones"), "Value").unwrap();
        assert_eq!(value, "Smartphones");
    }

    #[test]
    fn not_null_accepts_present_empty() {
        assert!(not_null(Some(""), "Value").is_ok());
    }

    #[test]
    fn not_null_throws_when_absent() {
        let err = not_null::<&str>(None, "FieldName").unwrap_err();

        assert_eq!(err.message(), "FieldName should not be null");
        assert_eq!(err.field(), "FieldName");
    }

    #[test_case(None ; "absent")]
    #[test_case(Some("") ; "empty")]
    #[test_case(Some("   ") ; "spaces")]
    #[test_case(Some("\t\n ") ; "mixed whitespace")]
    fn not_null_or_empty_throws(value: Option<&str>) {
        let err = not_null_or_empty(value, "Description").unwrap_err();
        assert_eq!(err.to_string(), "Description should not be empty or null");
    }

    #[test]
    fn not_null_or_empty_keeps_surrounding_whitespace() {
        let value = not_null_or_empty(Some("  books  "), "Name").unwrap();
        assert_eq!(value, "  books  ");
    }

    #[test_case("ab", 3 ; "one short")]
    #[test_case("", 1 ; "empty")]
    #[test_case("abcd", 10 ; "far short")]
    fn min_length_throws_when_less(value: &str, min: usize) {
        let err = min_length(value, min, "Name").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Name should be at least {min} characters long")
        );
    }

    #[test_case("abc", 3 ; "exact")]
    #[test_case("abcdef", 3 ; "longer")]
    fn min_length_ok(value: &str, min: usize) {
        assert!(min_length(value, min, "Name").is_ok());
    }

    #[test]
    fn max_length_throws_when_greater() {
        let value = "x".repeat(256);
        let err = max_length(&value, 255, "Name").unwrap_err();
        assert_eq!(err.to_string(), "Name should be less or equal 255 characters long");
    }

    #[test]
    fn max_length_groups_thousands_in_message() {
        let value = "x".repeat(10_001);
        let err = max_length(&value, 10_000, "Description").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Description should be less or equal 10,000 characters long"
        );
    }

    #[test_case(0, "0" ; "zero")]
    #[test_case(255, "255" ; "three digits")]
    #[test_case(1_000, "1,000" ; "four digits")]
    #[test_case(10_000, "10,000" ; "five digits")]
    #[test_case(1_234_567, "1,234,567" ; "seven digits")]
    fn group_thousands_inserts_commas(value: usize, expected: &str) {
        assert_eq!(group_thousands(value), expected);
    }

    #[test_case(255 ; "exact")]
    #[test_case(0 ; "empty")]
    fn max_length_ok(len: usize) {
        let value = "x".repeat(len);
        assert!(max_length(&value, 255, "Name").is_ok());
    }

    /// Lengths count characters, not UTF-8 bytes
    #[test]
    fn lengths_count_characters() {
        let value = "éé";
        assert_eq!(value.len(), 4);

        assert!(max_length(value, 2, "Name").is_ok());
        assert!(min_length(value, 3, "Name").is_err());
    }
}

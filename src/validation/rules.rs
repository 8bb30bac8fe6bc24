//! Constraint checks shared by the handlers.

use crate::validation::error::{FieldError, Location};

/// Require `value` to be between `min` and `max` characters long, inclusive.
///
/// Length counts Unicode scalar values, not bytes.
pub fn check_length(
    location: Location,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len < min {
        let unit = if min == 1 { "character" } else { "characters" };
        return Err(FieldError::new(
            location,
            field,
            "string_too_short",
            format!("String should have at least {min} {unit}"),
        )
        .with_input(value));
    }
    if len > max {
        let unit = if max == 1 { "character" } else { "characters" };
        return Err(FieldError::new(
            location,
            field,
            "string_too_long",
            format!("String should have at most {max} {unit}"),
        )
        .with_input(value));
    }
    Ok(())
}

/// Require `min <= value < max`.
pub fn check_range(
    location: Location,
    field: &str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), FieldError> {
    if value < min {
        return Err(FieldError::new(
            location,
            field,
            "greater_than_equal",
            format!("Input should be greater than or equal to {min}"),
        )
        .with_input(value));
    }
    if value >= max {
        return Err(FieldError::new(
            location,
            field,
            "less_than",
            format!("Input should be less than {max}"),
        )
        .with_input(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds_inclusive() {
        assert!(check_length(Location::Query, "n", "ab", 2, 10).is_ok());
        assert!(check_length(Location::Query, "n", "abcdefghij", 2, 10).is_ok());

        let short = check_length(Location::Query, "n", "a", 2, 10).unwrap_err();
        assert_eq!(short.kind, "string_too_short");
        assert_eq!(short.msg, "String should have at least 2 characters");

        let long = check_length(Location::Query, "n", "abcdefghijk", 2, 10).unwrap_err();
        assert_eq!(long.kind, "string_too_long");
    }

    #[test]
    fn test_length_counts_chars() {
        // 5 chars, 15 bytes
        assert!(check_length(Location::Body, "f", "안녕하세요", 1, 5).is_ok());
    }

    #[test]
    fn test_singular_unit() {
        let err = check_length(Location::Body, "filename", "", 1, 10).unwrap_err();
        assert_eq!(err.msg, "String should have at least 1 character");
    }

    #[test]
    fn test_range_half_open() {
        assert!(check_range(Location::Query, "x", 0, 0, 100).is_ok());
        assert!(check_range(Location::Query, "x", 99, 0, 100).is_ok());

        let below = check_range(Location::Query, "x", -1, 0, 100).unwrap_err();
        assert_eq!(below.kind, "greater_than_equal");

        let above = check_range(Location::Query, "x", 100, 0, 100).unwrap_err();
        assert_eq!(above.kind, "less_than");
        assert_eq!(above.input, Some(100.into()));
    }
}

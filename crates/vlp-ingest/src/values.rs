//! Polars `AnyValue` utility functions.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to a `String` representation.
/// Returns an empty string for `Null`.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => f64::from(v).to_string(),
        AnyValue::Float64(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Parses a string as f64, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_empty_string() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn numeric_values_format_plainly() {
        assert_eq!(any_to_string(AnyValue::Int64(42)), "42");
        assert_eq!(any_to_string(AnyValue::Float64(12345.0)), "12345");
    }

    #[test]
    fn parse_f64_accepts_plain_numbers() {
        assert_eq!(parse_f64("123"), Some(123.0));
        assert_eq!(parse_f64("  -45.67  "), Some(-45.67));
    }

    #[test]
    fn parse_f64_rejects_empty_and_text() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("  "), None);
        assert_eq!(parse_f64("na"), None);
        assert_eq!(parse_f64("$100"), None);
    }
}

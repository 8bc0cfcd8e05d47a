//! # Value Conversion
//!
//! Canonical text form of dynamic row values.
//!
//! Rows are loosely typed: a column may hold text, a number, a boolean,
//! null, or a nested structure. Composite keys compare values textually,
//! so every value needs exactly one canonical text form. Null gets a
//! fixed sentinel so that rows with different null patterns still build
//! aligned keys.

use serde_json::Value;

/// Text stand-in for an absent or null value.
///
/// A NUL character cannot appear in any legitimate column value, so the
/// sentinel never collides with real data (unlike the literal text "null").
pub const NULL_SENTINEL: &str = "\u{0}";

/// Canonical text form of a dynamic value.
///
/// - Null becomes [`NULL_SENTINEL`]
/// - Text is used as-is (no JSON quoting)
/// - Numbers and booleans render in their standard decimal/keyword form
/// - Nested arrays/objects render as compact JSON
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => NULL_SENTINEL.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Text form of a value that may be absent entirely.
///
/// Absent and null are deliberately indistinguishable in key components.
pub fn to_text_opt(value: Option<&Value>) -> String {
    match value {
        Some(v) => to_text(v),
        None => NULL_SENTINEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_scalars() {
        assert_eq!(to_text(&json!("abc")), "abc");
        assert_eq!(to_text(&json!(42)), "42");
        assert_eq!(to_text(&json!(4.5)), "4.5");
        assert_eq!(to_text(&json!(true)), "true");
    }

    #[test]
    fn test_null_uses_sentinel() {
        assert_eq!(to_text(&Value::Null), NULL_SENTINEL);
        assert_eq!(to_text_opt(None), NULL_SENTINEL);
        // The literal string "null" is a real value, not a null
        assert_ne!(to_text(&json!("null")), NULL_SENTINEL);
    }

    #[test]
    fn test_nested_renders_compact_json() {
        assert_eq!(to_text(&json!([1, 2])), "[1,2]");
        assert_eq!(to_text(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn test_string_is_not_quoted() {
        // A quoted form would make "1" and 1 compare unequal as key parts
        // only by quoting, which callers of string-keyed joins do not expect.
        assert_eq!(to_text(&json!("1")), to_text(&json!(1)));
    }
}

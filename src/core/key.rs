//! # Key Builder
//!
//! Composite-key construction.
//!
//! A composite key is the ordered concatenation of component texts joined
//! with a separator that cannot occur inside a legitimate component value.
//! Two rows produce the same key iff every component, in order, is
//! textually equal.

/// Separator between composite-key components.
///
/// ASCII unit separator: a control character absent from real column data,
/// so multi-column keys cannot collide with single-column values that
/// happen to contain the join of the parts.
pub const KEY_SEPARATOR: char = '\u{1F}';

/// Join component texts into a single composite key, in input order.
///
/// Pure and total: there is no failure mode. Null components must already
/// be the null sentinel, never omitted - omission would misalign keys
/// between rows with different null patterns.
pub fn build_key<I, S>(components: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut key = String::new();
    for (i, component) in components.into_iter().enumerate() {
        if i > 0 {
            key.push(KEY_SEPARATOR);
        }
        key.push_str(component.as_ref());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::NULL_SENTINEL;

    #[test]
    fn test_key_is_deterministic() {
        assert_eq!(build_key(["a", "b"]), build_key(["a", "b"]));
        assert_eq!(build_key(["a"]), "a");
        assert_eq!(build_key::<_, &str>([]), "");
    }

    #[test]
    fn test_key_is_order_sensitive() {
        assert_ne!(build_key(["a", "b"]), build_key(["b", "a"]));
    }

    #[test]
    fn test_key_differs_on_any_component() {
        assert_ne!(build_key(["a", "b"]), build_key(["a", "c"]));
    }

    #[test]
    fn test_separator_prevents_collision() {
        // "ab" + "c" must not equal "a" + "bc"
        assert_ne!(build_key(["ab", "c"]), build_key(["a", "bc"]));
    }

    #[test]
    fn test_null_sentinel_keeps_alignment() {
        // A null middle component still occupies its slot
        let with_null = build_key(["a", NULL_SENTINEL, "c"]);
        let without = build_key(["a", "c"]);
        assert_ne!(with_null, without);
    }
}

//! # Rows and Column Mappings
//!
//! A row is a loosely-typed record: column name to dynamic value, as
//! produced by whatever executed the query. Rows are caller-owned and
//! never mutated here.
//!
//! A [`ColumnMap`] pairs a logical column identifier with the column name
//! as it appears in a row. Entry order matters: it defines composite-key
//! field order and must be identical on both sides of a join for keys to
//! compare equal.

use std::collections::HashMap;

use serde_json::Value;

/// One result-set row: column name (case-variant) to dynamic value.
pub type Row = HashMap<String, Value>;

/// Ordered mapping from logical column identifier to row column name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnMap {
    entries: Vec<(String, String)>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an entry. Builder-style, so mappings read in key order:
    ///
    /// ```
    /// use rowbind::ColumnMap;
    /// let keys = ColumnMap::new().add("tenant_id", "TENANT_ID").add("user_id", "user_id");
    /// assert_eq!(keys.len(), 2);
    /// ```
    pub fn add(mut self, logical: impl Into<String>, column: impl Into<String>) -> Self {
        self.entries.push((logical.into(), column.into()));
        self
    }

    /// Build from `(logical, column)` pairs, preserving slice order.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(l, c)| (l.to_string(), c.to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), c.as_str()))
    }

    /// Logical identifier of the first entry, if any.
    ///
    /// For a branch-side value mapping this names the column holding the
    /// value to attach.
    pub fn first_logical(&self) -> Option<&str> {
        self.entries.first().map(|(l, _)| l.as_str())
    }
}

/// Look up a column in a row, tolerating case-insensitive backing stores.
///
/// Exactly two attempts: the name as given, then upper-cased. Neither
/// present means the value is absent - not an error; key construction
/// substitutes the null sentinel.
pub fn lookup<'a>(row: &'a Row, column: &str) -> Option<&'a Value> {
    row.get(column).or_else(|| row.get(&column.to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_column_map_preserves_order() {
        let map = ColumnMap::new().add("b", "B_COL").add("a", "A_COL");
        let logicals: Vec<_> = map.iter().map(|(l, _)| l).collect();
        assert_eq!(logicals, vec!["b", "a"]);
    }

    #[test]
    fn test_lookup_exact_case_first() {
        let r = row(&[("user_id", json!(1)), ("USER_ID", json!(2))]);
        assert_eq!(lookup(&r, "user_id"), Some(&json!(1)));
    }

    #[test]
    fn test_lookup_falls_back_to_upper() {
        let r = row(&[("USER_ID", json!(7))]);
        assert_eq!(lookup(&r, "user_id"), Some(&json!(7)));
    }

    #[test]
    fn test_lookup_does_not_try_lower() {
        // Two attempts only: as-given, then upper. A lower-cased row key
        // is not reachable from a mixed-case column name.
        let r = row(&[("user_id", json!(7))]);
        assert_eq!(lookup(&r, "User_Id"), None);
    }

    #[test]
    fn test_lookup_missing_is_none() {
        let r = row(&[("a", json!(1))]);
        assert_eq!(lookup(&r, "b"), None);
    }
}

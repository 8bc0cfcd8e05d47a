//! # Result Assembler
//!
//! Merges two flat row collections into 1:1 or 1:N associations keyed by
//! multi-column composite keys, and propagates matched values onto live
//! objects through the Access port.
//!
//! Building a match map ([`assemble_one_to_one`], [`assemble_one_to_many`])
//! is split from applying it ([`bind_prop_value`],
//! [`bind_prop_value_with_columns`]): one branch-side map can be computed
//! once and applied to many trunk-side object sets.
//!
//! Every operation is synchronous and stateless across calls. Match maps
//! are rebuilt from scratch each time - always fresh, never stale.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::core::key::build_key;
use crate::core::naming::to_attr_name;
use crate::core::row::{lookup, ColumnMap, Row};
use crate::core::value::to_text_opt;
use crate::ports::Access;

/// Write matched values into `target_attr` on each object whose composite
/// key (built from `getter_attrs`, in order) hits the match map.
///
/// In-place mutation, no return value. Empty `objects` or `match_map` is a
/// no-op: a binding target may legitimately have no related data.
///
/// An attribute-access failure on one object is logged and skips only that
/// object; the rest of the batch still binds.
pub fn bind_prop_value<T, V>(
    target_attr: &str,
    objects: &mut [T],
    getter_attrs: &[&str],
    match_map: &HashMap<String, V>,
) where
    T: Access,
    V: Clone + Into<Value>,
{
    bind_with_getters(target_attr, objects, getter_attrs, match_map);
}

/// Variant of [`bind_prop_value`] whose key components come from an
/// ordered column-id-to-attribute mapping; each logical column identifier
/// is converted to attribute naming style before lookup.
///
/// Same batch semantics and failure tolerance.
pub fn bind_prop_value_with_columns<T, V>(
    target_attr: &str,
    objects: &mut [T],
    column_to_attr: &ColumnMap,
    match_map: &HashMap<String, V>,
) where
    T: Access,
    V: Clone + Into<Value>,
{
    let getters: Vec<String> = column_to_attr
        .iter()
        .map(|(logical, _)| to_attr_name(logical))
        .collect();
    bind_with_getters(target_attr, objects, &getters, match_map);
}

fn bind_with_getters<T, V, S>(
    target_attr: &str,
    objects: &mut [T],
    getter_attrs: &[S],
    match_map: &HashMap<String, V>,
) where
    T: Access,
    V: Clone + Into<Value>,
    S: AsRef<str>,
{
    if objects.is_empty() || match_map.is_empty() {
        return;
    }
    let mut parts = Vec::with_capacity(getter_attrs.len());
    for object in objects.iter_mut() {
        parts.clear();
        let mut readable = true;
        for attr in getter_attrs {
            match object.get_attr(attr.as_ref()) {
                Ok(text) => parts.push(text),
                Err(e) => {
                    warn!(attribute = attr.as_ref(), error = %e, "skipping object: key attribute unreadable");
                    readable = false;
                    break;
                }
            }
        }
        if !readable {
            continue;
        }
        let key = build_key(parts.iter());
        if let Some(matched) = match_map.get(&key) {
            if let Err(e) = object.set_attr(target_attr, matched.clone().into()) {
                warn!(attribute = target_attr, error = %e, "skipping object: matched value not settable");
            }
        }
    }
}

/// Merge rows into a 1:1 match map: composite key (from `trunk_keys`) to
/// the single value named by the first entry of `branch_value`.
///
/// Column lookups try the name as given, then upper-cased. Duplicate keys
/// overwrite - last write wins, deterministic by input order, which is
/// what a true 1:1 relationship produces. Empty input yields an empty map.
pub fn assemble_one_to_one(
    rows: &[Row],
    trunk_keys: &ColumnMap,
    branch_value: &ColumnMap,
) -> HashMap<String, Value> {
    let mut result = HashMap::new();
    let Some(value_col) = branch_value.first_logical() else {
        return result;
    };
    for row in rows {
        let key = composite_key(row, trunk_keys);
        let value = lookup(row, value_col).cloned().unwrap_or(Value::Null);
        result.insert(key, value);
    }
    result
}

/// Merge rows into a 1:N match map: composite key to the ordered list of
/// values, preserving row-encounter order.
///
/// Same key/value extraction as [`assemble_one_to_one`]. A row whose
/// extracted value is null contributes nothing to its group. Empty input
/// yields an empty map.
pub fn assemble_one_to_many(
    rows: &[Row],
    trunk_keys: &ColumnMap,
    branch_value: &ColumnMap,
) -> HashMap<String, Vec<Value>> {
    let mut result: HashMap<String, Vec<Value>> = HashMap::new();
    let Some(value_col) = branch_value.first_logical() else {
        return result;
    };
    for row in rows {
        let value = match lookup(row, value_col) {
            Some(v) if !v.is_null() => v.clone(),
            _ => continue,
        };
        let key = composite_key(row, trunk_keys);
        result.entry(key).or_default().push(value);
    }
    result
}

/// Composite key of one row: each mapped column's value as text, in
/// mapping order, absent columns as the null sentinel.
fn composite_key(row: &Row, trunk_keys: &ColumnMap) -> String {
    build_key(
        trunk_keys
            .iter()
            .map(|(_, column)| to_text_opt(lookup(row, column))),
    )
}

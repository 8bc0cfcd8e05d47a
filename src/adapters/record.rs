//! # Record Adapter
//!
//! A schema-optional dynamic object: named fields backed by a map, with
//! per-field declared kinds driving best-effort adaptation on write.
//!
//! Good for:
//! - Result shapes assembled at runtime (no struct to declare)
//! - Tests
//! - Callers that receive field lists from configuration

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::value;
use crate::ports::{Access, AccessError, AccessResult};

/// Declared type of a [`Record`] field, the target of write adaptation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Bool,
    /// Accepts any value unchanged, including lists and nested objects.
    Json,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Bool => "bool",
            FieldKind::Json => "json",
        }
    }
}

/// Map-backed object implementing the Access port.
///
/// Fields without a declared kind accept any value; declared fields adapt
/// incoming values toward the declared kind and reject what cannot adapt.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Record {
    fields: HashMap<String, Value>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    kinds: HashMap<String, FieldKind>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field initialization.
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Declare a field's kind. Writes to the field adapt toward it.
    pub fn declare(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.kinds.insert(name.into(), kind);
        self
    }

    /// Raw field value, if set.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Adapt a value toward a declared kind, or report why it cannot adapt.
///
/// Null passes through for every kind: an absent value has no type to
/// mismatch.
fn adapt(attribute: &str, value: Value, kind: FieldKind) -> AccessResult<Value> {
    if value.is_null() {
        return Ok(value);
    }
    let mismatch = |expected: &'static str| AccessError::TypeMismatch {
        attribute: attribute.to_string(),
        expected,
    };
    match kind {
        FieldKind::Text => Ok(Value::String(value::to_text(&value))),
        FieldKind::Integer => match &value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(value),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| mismatch(kind.name())),
            _ => Err(mismatch(kind.name())),
        },
        FieldKind::Float => match &value {
            Value::Number(_) => Ok(value),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(|f| serde_json::Number::from_f64(f).map(Value::Number))
                .ok_or_else(|| mismatch(kind.name())),
            _ => Err(mismatch(kind.name())),
        },
        FieldKind::Bool => match &value {
            Value::Bool(_) => Ok(value),
            Value::String(s) => match s.trim() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(mismatch(kind.name())),
            },
            _ => Err(mismatch(kind.name())),
        },
        FieldKind::Json => Ok(value),
    }
}

impl Access for Record {
    fn get_attr(&self, name: &str) -> AccessResult<String> {
        self.fields
            .get(name)
            .map(value::to_text)
            .ok_or_else(|| AccessError::UnknownAttribute(name.to_string()))
    }

    fn set_attr(&mut self, name: &str, value: Value) -> AccessResult<()> {
        let adapted = match self.kinds.get(name) {
            Some(kind) => adapt(name, value, *kind)?,
            None => value,
        };
        self.fields.insert(name.to_string(), adapted);
        Ok(())
    }
}

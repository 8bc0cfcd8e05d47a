//! # Ports
//!
//! Trait contracts for objects the assembler binds values onto.
//!
//! The assembler never knows the concrete shape of a target object; it
//! reaches attributes only through the [`Access`] port. Implementations
//! decide the mechanism: a field map ([`crate::adapters::Record`]), an
//! explicit accessor registration over a typed struct, or generated code.

use serde_json::Value;
use thiserror::Error;

/// Attribute access failure on a target object.
///
/// Never fatal to an assembly pass: batch operations log the failing
/// attribute and continue with the remaining objects.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("attribute not readable: {0}")]
    Unreadable(String),

    #[error("cannot adapt value for attribute {attribute}: expected {expected}")]
    TypeMismatch {
        attribute: String,
        expected: &'static str,
    },
}

pub type AccessResult<T> = Result<T, AccessError>;

/// Dynamic get/set of named attributes on a caller-owned object.
pub trait Access {
    /// Read the named attribute as canonical text.
    ///
    /// Scalars convert per [`crate::core::value::to_text`]; a null
    /// attribute reads as the null sentinel, which is what key
    /// construction expects.
    fn get_attr(&self, name: &str) -> AccessResult<String>;

    /// Write a value into the named attribute, adapting the value to the
    /// attribute's declared type where feasible (text to numeric, numeric
    /// to text, text to boolean).
    fn set_attr(&mut self, name: &str, value: Value) -> AccessResult<()>;
}

//! # Adapters
//!
//! Implementations of the Access port.
//!
//! The assembler works against the port, so target-object shapes can be
//! swapped without touching binding logic:
//! - `Record` - schema-optional field map, the generic dynamic object
//! - domain structs - implement `Access` directly when the shape is fixed

mod record;

pub use record::{FieldKind, Record};

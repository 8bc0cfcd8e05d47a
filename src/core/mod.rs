//! # Core
//!
//! Pure binding logic - no I/O, no side effects.
//!
//! Contains:
//! - `value` - canonical text conversion of dynamic values, null sentinel
//! - `key` - composite-key construction
//! - `naming` - column-style to attribute-style identifier transforms
//! - `row` - Row and ColumnMap types, case-fallback column lookup

pub mod key;
pub mod naming;
pub mod row;
pub mod value;

pub use key::{build_key, KEY_SEPARATOR};
pub use naming::{to_attr_name, to_lower_camel};
pub use row::{lookup, ColumnMap, Row};
pub use value::{to_text, NULL_SENTINEL};

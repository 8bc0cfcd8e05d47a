//! # ROWBIND - Relational Result Binding
//!
//! > An equality join and a group-by, without the relational engine
//!
//! ROWBIND merges two flat, independently-produced collections of
//! loosely-typed rows into 1:1 or 1:N associations over multi-column
//! composite keys, then propagates the matched values onto live in-memory
//! objects through dynamic property access.
//!
//! ## Philosophy
//!
//! - **Keys are text** - every component value has one canonical text form,
//!   null included, so comparison never depends on column types
//! - **Build once, apply many** - a match map computed from one branch-side
//!   result set can be applied to any number of trunk-side object sets
//! - **Tolerant at the edges** - missing columns, empty inputs, and
//!   malformed objects degrade to skips and empty results, never to aborts
//! - **Pure core, swappable adapters** - hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        ROWBIND                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure logic, no I/O)                                  │
//! │    Row, ColumnMap, build_key, naming transforms             │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Access                                                    │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Record - schema-optional dynamic object                  │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    assemble_one_to_one / assemble_one_to_many               │
//! │    bind_prop_value / bind_prop_value_with_columns           │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rowbind::{assemble_one_to_one, bind_prop_value, ColumnMap, Record, Row};
//! use serde_json::json;
//!
//! // Branch side: a raw result set, one row per related record
//! let rows: Vec<Row> = vec![
//!     [("user_id".to_string(), json!(1)), ("org_name".to_string(), json!("dibo"))]
//!         .into_iter().collect(),
//! ];
//!
//! // Merge into a match map: composite key -> value
//! let map = assemble_one_to_one(
//!     &rows,
//!     &ColumnMap::new().add("user_id", "user_id"),
//!     &ColumnMap::new().add("org_name", "org_name"),
//! );
//!
//! // Trunk side: live objects, enriched in place
//! let mut users = vec![Record::new().with_field("user_id", json!(1))];
//! bind_prop_value("org_name", &mut users, &["user_id"], &map);
//!
//! assert_eq!(users[0].field("org_name"), Some(&json!("dibo")));
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure logic, no I/O
/// Contains: Row, ColumnMap, key building, naming transforms, value text
pub mod core;

/// Port definitions - trait contracts for target objects
/// Contains: Access trait, AccessError
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: Record, FieldKind
pub mod adapters;

/// Engine - orchestration layer
/// Contains: the four assembler operations
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::key::{build_key, KEY_SEPARATOR};
pub use crate::core::naming::{to_attr_name, to_lower_camel};
pub use crate::core::row::{lookup, ColumnMap, Row};
pub use crate::core::value::{to_text, NULL_SENTINEL};

// Port traits
pub use crate::ports::{Access, AccessError, AccessResult};

// Adapters
pub use crate::adapters::{FieldKind, Record};

// Engine
pub use crate::engine::{
    assemble_one_to_many, assemble_one_to_one, bind_prop_value, bind_prop_value_with_columns,
};

// Row values are serde_json's sum type; re-exported so callers need no
// direct serde_json dependency for signatures.
pub use serde_json::Value;

//! # Engine
//!
//! The orchestration layer: the result assembler.
//!
//! This is where:
//! - composite keys are derived from rows and objects
//! - match maps are built (1:1 merge, 1:N grouping)
//! - matched values are written back onto target objects

mod assembler;

pub use assembler::{
    assemble_one_to_many, assemble_one_to_one, bind_prop_value, bind_prop_value_with_columns,
};

//! Validation utilities for CCS matrices
//!
//! This module contains pure validation functions with no I/O dependencies.
//! All functions are arithmetic on dimensions, indices and record order.

pub mod bounds;
pub mod format;

pub use bounds::{
    check_cardinality, check_column, check_dimensions, check_row, check_row_range,
    dense_capacity,
};
pub use format::{align_to_block, grown_capacity, validate_record, validate_record_order};

//! Binary format definitions for serialized CCS matrices
//!
//! This module contains pure data structure definitions for the wire format.
//! No I/O operations - only layouts and byte-array encoding.

pub mod constants;
pub mod header;

pub use header::{EntryRecord, WireHeader};

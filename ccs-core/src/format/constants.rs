//! Storage and wire-format constants

/// Block size that pre-sized buffers are aligned to
pub const BLOCK_SIZE: usize = 32;

/// Search ranges narrower than this are scanned linearly
pub const LINEAR_SEARCH_THRESHOLD: usize = 8;

/// Largest number of entries a matrix may hold
///
/// Indices travel as signed 32-bit integers on the wire.
pub const MAX_DENSE_ENTRIES: usize = i32::MAX as usize;

/// Wire format constants
pub mod wire {
    /// Header: rows, columns, cardinality as int32
    pub const HEADER_SIZE: usize = 12;

    /// Record: row and column as int32, one value byte
    pub const RECORD_SIZE: usize = 9;
}

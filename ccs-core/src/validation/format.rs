//! Buffer sizing and record ordering rules
//!
//! Pure functions describing how storage is sized and which record
//! sequences form a valid serialized matrix.

use crate::format::constants::BLOCK_SIZE;
use crate::{CcsError, EntryRecord};

/// Round an entry count up to whole storage blocks
///
/// Always yields at least one block more than `count / BLOCK_SIZE`, so a
/// matrix with no entries still reserves one block.
pub const fn align_to_block(count: usize) -> usize {
    (count / BLOCK_SIZE + 1).saturating_mul(BLOCK_SIZE)
}

/// Next capacity under the 1.5x growth policy, capped at the dense size
pub const fn grown_capacity(cardinality: usize, dense_capacity: usize) -> usize {
    // floor(cardinality * 3 / 2) + 1 without overflowing
    let wanted = (cardinality / 2)
        .saturating_mul(3)
        .saturating_add((cardinality % 2) * 3 / 2 + 1);
    if wanted < dense_capacity {
        wanted
    } else {
        dense_capacity
    }
}

/// Validate that `next` may follow `previous` in a serialized matrix
///
/// Records are grouped by non-decreasing column and strictly ascending
/// row within a column.
pub const fn validate_record_order(
    previous: &EntryRecord,
    next: &EntryRecord,
) -> Result<(), CcsError> {
    if next.column < previous.column
        || (next.column == previous.column && next.row <= previous.row)
    {
        return Err(CcsError::UnsortedRecords);
    }
    Ok(())
}

/// Validate a record against the matrix dimensions
pub const fn validate_record(
    record: &EntryRecord,
    rows: usize,
    columns: usize,
) -> Result<(), CcsError> {
    if record.row >= rows || record.column >= columns || record.value == 0 {
        return Err(CcsError::CorruptedData);
    }
    Ok(())
}

//! Index and dimension validation
//!
//! Pure checks with no I/O, shared by every matrix operation that takes
//! caller-supplied coordinates.

use crate::format::constants::MAX_DENSE_ENTRIES;
use crate::CcsError;

/// Validate a row index against the row count
#[inline]
pub const fn check_row(row: usize, rows: usize) -> Result<(), CcsError> {
    if row >= rows {
        return Err(CcsError::RowOutOfBounds { row, rows });
    }
    Ok(())
}

/// Validate a column index against the column count
#[inline]
pub const fn check_column(column: usize, columns: usize) -> Result<(), CcsError> {
    if column >= columns {
        return Err(CcsError::ColumnOutOfBounds { column, columns });
    }
    Ok(())
}

/// Validate a half-open row range `from..to`
pub const fn check_row_range(from: usize, to: usize, rows: usize) -> Result<(), CcsError> {
    if from > to || to > rows {
        return Err(CcsError::InvalidRowRange { from, to, rows });
    }
    Ok(())
}

/// Validate dimensions and return their dense size
///
/// The dense size must fit the wire index range.
pub const fn check_dimensions(rows: usize, columns: usize) -> Result<usize, CcsError> {
    match rows.checked_mul(columns) {
        Some(dense) if dense <= MAX_DENSE_ENTRIES => Ok(dense),
        _ => Err(CcsError::DimensionOverflow { rows, columns }),
    }
}

/// Validate a requested cardinality against the dense size
pub const fn check_cardinality(
    rows: usize,
    columns: usize,
    cardinality: usize,
) -> Result<(), CcsError> {
    let dense = match check_dimensions(rows, columns) {
        Ok(dense) => dense,
        Err(e) => return Err(e),
    };
    if cardinality > dense {
        return Err(CcsError::InvalidCardinality {
            cardinality,
            capacity: dense,
        });
    }
    Ok(())
}

/// Dense size capped at the index boundary
pub const fn dense_capacity(rows: usize, columns: usize) -> usize {
    match rows.checked_mul(columns) {
        Some(dense) if dense <= MAX_DENSE_ENTRIES => dense,
        _ => MAX_DENSE_ENTRIES,
    }
}

//! Error types for CCS matrix operations

/// Errors that can occur during CCS matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CcsError {
    /// Row index outside `0..rows`
    RowOutOfBounds { row: usize, rows: usize },
    /// Column index outside `0..columns`
    ColumnOutOfBounds { column: usize, columns: usize },
    /// Row range `from..to` is reversed or exceeds the row count
    InvalidRowRange { from: usize, to: usize, rows: usize },
    /// Submatrix selection with no rows or no columns
    EmptySelection,
    /// Cardinality larger than the dense size of the matrix
    InvalidCardinality { cardinality: usize, capacity: usize },
    /// Dense size of the requested dimensions does not fit the index range
    DimensionOverflow { rows: usize, columns: usize },
    /// Source data length does not match the declared dimensions
    SourceLengthMismatch { expected: usize, actual: usize },
    /// Growth requested while already holding the dense number of entries
    CapacityExhausted,
    /// Serialized input ended before the declared content
    TruncatedInput,
    /// Serialized input describes an impossible matrix
    CorruptedData,
    /// Serialized records are not in column-major, row-ascending order
    UnsortedRecords,
}

/// Broad classification of a [`CcsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller broke an operation's preconditions
    Contract,
    /// A structural invariant of the matrix failed; indicates a defect
    Internal,
    /// Serialized data was rejected
    Format,
}

impl CcsError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            CcsError::RowOutOfBounds { .. }
            | CcsError::ColumnOutOfBounds { .. }
            | CcsError::InvalidRowRange { .. }
            | CcsError::EmptySelection
            | CcsError::InvalidCardinality { .. }
            | CcsError::DimensionOverflow { .. }
            | CcsError::SourceLengthMismatch { .. } => ErrorCategory::Contract,
            CcsError::CapacityExhausted => ErrorCategory::Internal,
            CcsError::TruncatedInput | CcsError::CorruptedData | CcsError::UnsortedRecords => {
                ErrorCategory::Format
            }
        }
    }
}

impl core::fmt::Display for CcsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CcsError::RowOutOfBounds { row, rows } => {
                write!(f, "Row index {row} out of bounds for {rows} rows")
            }
            CcsError::ColumnOutOfBounds { column, columns } => {
                write!(f, "Column index {column} out of bounds for {columns} columns")
            }
            CcsError::InvalidRowRange { from, to, rows } => {
                write!(f, "Invalid row range {from}..{to} for {rows} rows")
            }
            CcsError::EmptySelection => write!(f, "No rows or columns selected"),
            CcsError::InvalidCardinality {
                cardinality,
                capacity,
            } => write!(
                f,
                "Cardinality {cardinality} exceeds matrix capacity {capacity}"
            ),
            CcsError::DimensionOverflow { rows, columns } => {
                write!(f, "Dimensions {rows}x{columns} overflow the index range")
            }
            CcsError::SourceLengthMismatch { expected, actual } => {
                write!(f, "Source holds {actual} symbols, expected {expected}")
            }
            CcsError::CapacityExhausted => write!(f, "Matrix cannot grow beyond its dense size"),
            CcsError::TruncatedInput => write!(f, "Serialized matrix is truncated"),
            CcsError::CorruptedData => write!(f, "Data corruption detected"),
            CcsError::UnsortedRecords => write!(f, "Serialized records are out of order"),
        }
    }
}

impl core::error::Error for CcsError {}

/// Result type for CCS operations
pub type Result<T> = core::result::Result<T, CcsError>;

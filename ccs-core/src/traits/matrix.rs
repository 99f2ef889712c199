//! Core matrix abstraction traits
//!
//! This module defines the read-only views a matrix is built from and the
//! minimal interface every sparse octet matrix exposes.

/// Source of symbols used to populate a matrix at construction time
///
/// A source behaves like a dense `rows x columns` grid. Construction reads
/// every cell once, in column-major order.
pub trait MatrixSource {
    /// Number of rows in the source
    fn rows(&self) -> usize;

    /// Number of columns in the source
    fn columns(&self) -> usize;

    /// Symbol at `(row, column)`
    ///
    /// Callers guarantee `row < rows()` and `column < columns()`.
    fn get(&self, row: usize, column: usize) -> u8;
}

/// Format-agnostic access to a sparse octet matrix
pub trait SparseMatrix {
    /// Get matrix dimensions as (rows, columns)
    fn dimensions(&self) -> (usize, usize);

    /// Get the number of stored (non-zero) entries
    fn cardinality(&self) -> usize;

    /// Get the symbol at the specified position
    ///
    /// Unstored positions read as the field zero.
    fn get(&self, row: usize, column: usize) -> crate::Result<u8>;

    /// Whether a non-zero entry is stored at the position
    fn non_zero_at(&self, row: usize, column: usize) -> crate::Result<bool>;

    /// Fraction of cells holding a stored entry
    fn density(&self) -> f64 {
        let (rows, columns) = self.dimensions();
        let dense = rows.saturating_mul(columns);
        if dense == 0 {
            0.0
        } else {
            self.cardinality() as f64 / dense as f64
        }
    }
}

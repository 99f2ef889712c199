//! Compressed Column Storage matrix over a 256-symbol field
//!
//! Entries are kept in two parallel buffers, `values` and `row_indices`,
//! ordered by column and then by ascending row. `column_pointers[j]` and
//! `column_pointers[j + 1]` delimit the entries of column `j`.
//!
//! Columns are indexed, rows are not: column scans are proportional to the
//! column size while row scans pay one search per column. Point insertion
//! and removal shift every entry behind the touched offset, which makes
//! them O(cardinality); bulk construction from a source is the cheap path.

mod access;
mod cursor;
mod extract;
mod extremum;
mod locate;
mod storage;
mod structure;
mod traversal;

pub use traversal::NonZeroIter;

use std::fmt;
use std::marker::PhantomData;

use ccs_core::{
    align_to_block, check_cardinality, check_dimensions, CcsError, MatrixSource, OctetField,
    Result, SparseMatrix, UnsignedOctets,
};

use crate::source::{ArraySource, NestedArraySource};

/// Sparse octet matrix in compressed column layout
pub struct CcsMatrix<F: OctetField = UnsignedOctets> {
    rows: usize,
    columns: usize,
    cardinality: usize,
    values: Vec<u8>,
    row_indices: Vec<usize>,
    column_pointers: Vec<usize>,
    field: PhantomData<F>,
}

impl<F: OctetField> CcsMatrix<F> {
    /// Create an empty matrix
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::with_cardinality(rows, columns, 0)
    }

    /// Create an empty matrix with room for `cardinality` entries
    pub fn with_cardinality(rows: usize, columns: usize, cardinality: usize) -> Result<Self> {
        check_cardinality(rows, columns, cardinality)?;
        let capacity = align_to_block(cardinality);

        Ok(Self::from_parts(
            rows,
            columns,
            0,
            vec![0; capacity],
            vec![0; capacity],
            vec![0; columns + 1],
        ))
    }

    /// Populate a matrix from every non-zero cell of a source
    pub fn from_source<S: MatrixSource + ?Sized>(source: &S) -> Result<Self> {
        let mut matrix = Self::new(source.rows(), source.columns())?;

        for column in 0..matrix.columns {
            matrix.column_pointers[column] = matrix.cardinality;
            for row in 0..matrix.rows {
                let value = source.get(row, column);
                if F::is_zero(value) {
                    continue;
                }

                if matrix.values.len() < matrix.cardinality + 1 {
                    matrix.grow()?;
                }

                matrix.values[matrix.cardinality] = value;
                matrix.row_indices[matrix.cardinality] = row;
                matrix.cardinality += 1;
            }
        }
        matrix.column_pointers[matrix.columns] = matrix.cardinality;

        Ok(matrix)
    }

    /// Populate a matrix from a row-major array of `rows * columns` symbols
    pub fn from_array(rows: usize, columns: usize, data: &[u8]) -> Result<Self> {
        Self::from_source(&ArraySource::new(rows, columns, data)?)
    }

    /// Populate a matrix from a slice of equally long rows
    pub fn from_nested<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        Self::from_source(&NestedArraySource::new(rows)?)
    }

    /// Assemble a matrix from raw compressed-column buffers
    ///
    /// `values` and `row_indices` hold the entries (and possibly spare
    /// capacity past the last column pointer). Every layout invariant is
    /// checked before the matrix is returned.
    pub fn from_raw_parts(
        rows: usize,
        columns: usize,
        values: Vec<u8>,
        row_indices: Vec<usize>,
        column_pointers: Vec<usize>,
    ) -> Result<Self> {
        check_dimensions(rows, columns)?;
        if column_pointers.len() != columns + 1 || values.len() != row_indices.len() {
            return Err(CcsError::CorruptedData);
        }
        let cardinality = column_pointers[columns];
        if cardinality > values.len() {
            return Err(CcsError::CorruptedData);
        }
        check_cardinality(rows, columns, cardinality)?;

        let matrix = Self::from_parts(
            rows,
            columns,
            cardinality,
            values,
            row_indices,
            column_pointers,
        );
        matrix.validate()?;
        Ok(matrix)
    }

    /// Unchecked assembly used by operations that build valid buffers
    pub(crate) fn from_parts(
        rows: usize,
        columns: usize,
        cardinality: usize,
        values: Vec<u8>,
        row_indices: Vec<usize>,
        column_pointers: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(values.len(), row_indices.len());
        debug_assert_eq!(column_pointers.len(), columns + 1);

        Self {
            rows,
            columns,
            cardinality,
            values,
            row_indices,
            column_pointers,
            field: PhantomData,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of stored entries
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// Stored values in column-major, row-ascending order
    pub fn values(&self) -> &[u8] {
        &self.values[..self.cardinality]
    }

    /// Row index of each stored value
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices[..self.cardinality]
    }

    /// Column start offsets, `columns + 1` long
    pub fn column_pointers(&self) -> &[usize] {
        &self.column_pointers
    }

    /// Offsets `[start, end)` of column `column`'s entries
    #[inline]
    pub(crate) fn column_range(&self, column: usize) -> (usize, usize) {
        (
            self.column_pointers[column],
            self.column_pointers[column + 1],
        )
    }

    /// Check every layout invariant
    ///
    /// Column pointers start at zero, never decrease and end at the
    /// cardinality; rows ascend strictly within a column and stay in range;
    /// no stored value is the field zero.
    pub fn validate(&self) -> Result<()> {
        if self.column_pointers.len() != self.columns + 1
            || self.column_pointers[0] != 0
            || self.column_pointers[self.columns] != self.cardinality
            || self.cardinality > self.values.len()
            || self.values.len() != self.row_indices.len()
        {
            return Err(CcsError::CorruptedData);
        }

        for column in 0..self.columns {
            let (start, end) = self.column_range(column);
            if start > end {
                return Err(CcsError::CorruptedData);
            }

            let rows = &self.row_indices[start..end];
            if rows.iter().any(|&row| row >= self.rows)
                || rows.windows(2).any(|pair| pair[0] >= pair[1])
            {
                return Err(CcsError::CorruptedData);
            }
        }

        if self.values().iter().any(|&value| F::is_zero(value)) {
            return Err(CcsError::CorruptedData);
        }

        Ok(())
    }
}

impl<F: OctetField> SparseMatrix for CcsMatrix<F> {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    fn cardinality(&self) -> usize {
        self.cardinality
    }

    fn get(&self, row: usize, column: usize) -> Result<u8> {
        CcsMatrix::get(self, row, column)
    }

    fn non_zero_at(&self, row: usize, column: usize) -> Result<bool> {
        CcsMatrix::non_zero_at(self, row, column)
    }
}

/// Matrices are equal when they have the same shape and the same entries
///
/// Spare capacity does not take part in the comparison.
impl<F: OctetField> PartialEq for CcsMatrix<F> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.column_pointers == other.column_pointers
            && self.values() == other.values()
            && self.row_indices() == other.row_indices()
    }
}

impl<F: OctetField> Eq for CcsMatrix<F> {}

impl<F: OctetField> fmt::Debug for CcsMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CcsMatrix")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("cardinality", &self.cardinality)
            .field("capacity", &self.values.len())
            .field("values", &self.values())
            .field("row_indices", &self.row_indices())
            .field("column_pointers", &self.column_pointers)
            .finish()
    }
}

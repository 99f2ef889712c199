//! Dense sources a matrix can be populated from

use ccs_core::{CcsError, MatrixSource, OctetField, Result};

use crate::CcsMatrix;

/// Row-major flat array of `rows * columns` symbols
#[derive(Debug, Clone, Copy)]
pub struct ArraySource<'a> {
    rows: usize,
    columns: usize,
    data: &'a [u8],
}

impl<'a> ArraySource<'a> {
    pub fn new(rows: usize, columns: usize, data: &'a [u8]) -> Result<Self> {
        let expected = rows
            .checked_mul(columns)
            .ok_or(CcsError::DimensionOverflow { rows, columns })?;
        if data.len() != expected {
            return Err(CcsError::SourceLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            rows,
            columns,
            data,
        })
    }
}

impl MatrixSource for ArraySource<'_> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn get(&self, row: usize, column: usize) -> u8 {
        self.data[row * self.columns + column]
    }
}

/// Slice of equally long rows
#[derive(Debug, Clone, Copy)]
pub struct NestedArraySource<'a, R> {
    rows: &'a [R],
    columns: usize,
}

impl<'a, R: AsRef<[u8]>> NestedArraySource<'a, R> {
    /// Wrap `rows`, rejecting ragged input
    pub fn new(rows: &'a [R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        if let Some(ragged) = rows.iter().find(|row| row.as_ref().len() != columns) {
            return Err(CcsError::SourceLengthMismatch {
                expected: columns,
                actual: ragged.as_ref().len(),
            });
        }

        Ok(Self { rows, columns })
    }
}

impl<R: AsRef<[u8]>> MatrixSource for NestedArraySource<'_, R> {
    fn rows(&self) -> usize {
        self.rows.len()
    }

    fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn get(&self, row: usize, column: usize) -> u8 {
        self.rows[row].as_ref()[column]
    }
}

/// A matrix reads as a dense source, so it can seed another matrix
impl<F: OctetField> MatrixSource for CcsMatrix<F> {
    fn rows(&self) -> usize {
        CcsMatrix::rows(self)
    }

    fn columns(&self) -> usize {
        CcsMatrix::columns(self)
    }

    fn get(&self, row: usize, column: usize) -> u8 {
        let (offset, found) = self.find(row, column);
        if found {
            self.values()[offset]
        } else {
            F::ZERO
        }
    }
}

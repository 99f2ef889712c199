//! Structural operations: copy, resize and submatrix selection
//!
//! Each operation returns a new matrix with freshly allocated buffers.

use ccs_core::{
    align_to_block, check_column, check_dimensions, check_row, CcsError, OctetField, Result,
};
use tracing::debug;

use super::CcsMatrix;

impl<F: OctetField> CcsMatrix<F> {
    /// Deep copy with capacity trimmed to whole blocks
    pub fn copy(&self) -> Self {
        let capacity = align_to_block(self.cardinality);
        let mut values = vec![0u8; capacity];
        let mut row_indices = vec![0usize; capacity];
        values[..self.cardinality].copy_from_slice(self.values());
        row_indices[..self.cardinality].copy_from_slice(self.row_indices());

        Self::from_parts(
            self.rows,
            self.columns,
            self.cardinality,
            values,
            row_indices,
            self.column_pointers.clone(),
        )
    }

    /// New matrix of `rows x columns` holding the entries that still fit
    ///
    /// - same shape: deep copy
    /// - no dimension grows: entries outside the new bounds are dropped
    /// - columns grow: new columns are empty; rows that no longer fit are dropped
    /// - rows grow while columns shrink or stay: columns past `columns` are
    ///   dropped and every remaining entry is kept
    pub fn resize(&self, rows: usize, columns: usize) -> Result<Self> {
        check_dimensions(rows, columns)?;
        debug!(
            from_rows = self.rows,
            from_columns = self.columns,
            rows,
            columns,
            cardinality = self.cardinality,
            "resizing matrix"
        );

        if rows == self.rows && columns == self.columns {
            return Ok(self.copy());
        }

        if rows <= self.rows && columns <= self.columns {
            return Ok(self.truncate(rows, columns));
        }

        if columns > self.columns {
            if rows < self.rows {
                return Ok(self.truncate(rows, columns));
            }
            return Ok(self.extend_columns(rows, columns));
        }

        Ok(self.column_prefix(rows, columns))
    }

    /// Submatrix of the listed rows and columns
    ///
    /// Lists may reorder and repeat indices. Entry `(i, j)` of the result is
    /// entry `(rows[i], columns[j])` of `self`.
    pub fn select(&self, rows: &[usize], columns: &[usize]) -> Result<Self> {
        if rows.is_empty() || columns.is_empty() {
            return Err(CcsError::EmptySelection);
        }
        for &row in rows {
            check_row(row, self.rows)?;
        }
        for &column in columns {
            check_column(column, self.columns)?;
        }
        check_dimensions(rows.len(), columns.len())?;

        // size the buffers exactly before filling them
        let mut cardinality = 0;
        for &column in columns {
            for &row in rows {
                if self.find(row, column).1 {
                    cardinality += 1;
                }
            }
        }

        let capacity = align_to_block(cardinality);
        let mut values = vec![0u8; capacity];
        let mut row_indices = vec![0usize; capacity];
        let mut column_pointers = vec![0usize; columns.len() + 1];

        let mut end = 0;
        for (j, &column) in columns.iter().enumerate() {
            for (i, &row) in rows.iter().enumerate() {
                let (offset, found) = self.find(row, column);
                if found {
                    values[end] = self.values[offset];
                    row_indices[end] = i;
                    end += 1;
                }
            }
            column_pointers[j + 1] = end;
        }

        debug!(
            rows = rows.len(),
            columns = columns.len(),
            cardinality,
            "selected submatrix"
        );

        Ok(Self::from_parts(
            rows.len(),
            columns.len(),
            cardinality,
            values,
            row_indices,
            column_pointers,
        ))
    }

    /// Keep entries with `row < rows` in the first `columns` columns
    fn truncate(&self, rows: usize, columns: usize) -> Self {
        let capacity = align_to_block(self.cardinality);
        let mut values = vec![0u8; capacity];
        let mut row_indices = vec![0usize; capacity];
        let mut column_pointers = vec![0usize; columns + 1];

        let kept_columns = columns.min(self.columns);
        let mut cardinality = 0;
        for column in 0..kept_columns {
            column_pointers[column] = cardinality;
            let (start, end) = self.column_range(column);
            for offset in start..end {
                if self.row_indices[offset] >= rows {
                    break;
                }
                values[cardinality] = self.values[offset];
                row_indices[cardinality] = self.row_indices[offset];
                cardinality += 1;
            }
        }
        for pointer in &mut column_pointers[kept_columns..] {
            *pointer = cardinality;
        }

        Self::from_parts(
            rows,
            columns,
            cardinality,
            values,
            row_indices,
            column_pointers,
        )
    }

    /// Append empty columns; every row still fits
    fn extend_columns(&self, rows: usize, columns: usize) -> Self {
        let mut extended = self.copy();
        extended.rows = rows;
        extended.columns = columns;
        extended
            .column_pointers
            .resize(columns + 1, self.cardinality);
        extended
    }

    /// Keep the first `columns` columns whole; every row still fits
    fn column_prefix(&self, rows: usize, columns: usize) -> Self {
        let cardinality = self.column_pointers[columns];
        let capacity = align_to_block(cardinality);
        let mut values = vec![0u8; capacity];
        let mut row_indices = vec![0usize; capacity];
        values[..cardinality].copy_from_slice(&self.values[..cardinality]);
        row_indices[..cardinality].copy_from_slice(&self.row_indices[..cardinality]);

        Self::from_parts(
            rows,
            columns,
            cardinality,
            values,
            row_indices,
            self.column_pointers[..=columns].to_vec(),
        )
    }
}

impl<F: OctetField> Clone for CcsMatrix<F> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

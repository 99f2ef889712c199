//! Point access and mutation
//!
//! Insertion and removal keep the whole entry buffer contiguous, so each
//! one moves every entry behind the touched offset and adjusts every later
//! column pointer. Callers writing many cells should fill columns in
//! ascending order, or build from a source, to avoid the shifts.

use ccs_core::{check_column, check_row, check_row_range, MatrixFunction, OctetField, Result};

use super::CcsMatrix;

impl<F: OctetField> CcsMatrix<F> {
    /// Symbol at `(row, column)`; unstored cells read as zero
    pub fn get(&self, row: usize, column: usize) -> Result<u8> {
        check_row(row, self.rows)?;
        check_column(column, self.columns)?;

        let (offset, found) = self.find(row, column);
        Ok(if found { self.values[offset] } else { F::ZERO })
    }

    /// Write a symbol at `(row, column)`
    ///
    /// Writing zero removes the entry. Inserting or removing costs
    /// O(cardinality); overwriting an existing entry is O(1) after the search.
    pub fn set(&mut self, row: usize, column: usize, value: u8) -> Result<()> {
        check_row(row, self.rows)?;
        check_column(column, self.columns)?;

        let (offset, found) = self.find(row, column);
        if found {
            if F::is_zero(value) {
                self.remove(offset, column);
            } else {
                self.values[offset] = value;
            }
            Ok(())
        } else {
            self.insert(offset, row, column, value)
        }
    }

    /// Replace the symbol at `(row, column)` with `function`'s result
    ///
    /// Unstored cells are evaluated with zero; a zero result removes or
    /// skips the entry.
    pub fn update<G: MatrixFunction>(
        &mut self,
        row: usize,
        column: usize,
        mut function: G,
    ) -> Result<()> {
        check_row(row, self.rows)?;
        check_column(column, self.columns)?;

        let (offset, found) = self.find(row, column);
        if found {
            let value = function.evaluate(row, column, self.values[offset]);
            if F::is_zero(value) {
                self.remove(offset, column);
            } else {
                self.values[offset] = value;
            }
            Ok(())
        } else {
            let value = function.evaluate(row, column, F::ZERO);
            self.insert(offset, row, column, value)
        }
    }

    /// Whether an entry is stored at `(row, column)`
    pub fn non_zero_at(&self, row: usize, column: usize) -> Result<bool> {
        check_row(row, self.rows)?;
        check_column(column, self.columns)?;
        Ok(self.find(row, column).1)
    }

    /// Number of stored entries, same as [`CcsMatrix::cardinality`]
    pub fn non_zeros(&self) -> usize {
        self.cardinality
    }

    /// Number of entries stored in a column
    pub fn non_zeros_in_column(&self, column: usize) -> Result<usize> {
        check_column(column, self.columns)?;
        let (start, end) = self.column_range(column);
        Ok(end - start)
    }

    /// Number of entries stored in a column within rows `from..to`
    pub fn non_zeros_in_column_range(&self, column: usize, from: usize, to: usize) -> Result<usize> {
        check_column(column, self.columns)?;
        check_row_range(from, to, self.rows)?;

        let (start, end) = self.column_range(column);
        let mut count = 0;
        for offset in self.locate(from, start, end)..end {
            if self.row_indices[offset] >= to {
                break;
            }
            count += 1;
        }
        Ok(count)
    }

    /// Number of entries stored in a row
    ///
    /// Rows are not indexed: this searches every column.
    pub fn non_zeros_in_row(&self, row: usize) -> Result<usize> {
        check_row(row, self.rows)?;
        Ok((0..self.columns)
            .filter(|&column| self.find(row, column).1)
            .count())
    }

    /// Store a new entry at `offset`, the insertion point for `row` in `column`
    fn insert(&mut self, offset: usize, row: usize, column: usize, value: u8) -> Result<()> {
        if F::is_zero(value) {
            return Ok(());
        }

        if self.values.len() < self.cardinality + 1 {
            self.grow()?;
        }

        self.values.copy_within(offset..self.cardinality, offset + 1);
        self.row_indices
            .copy_within(offset..self.cardinality, offset + 1);
        self.values[offset] = value;
        self.row_indices[offset] = row;

        for pointer in &mut self.column_pointers[column + 1..] {
            *pointer += 1;
        }
        self.cardinality += 1;
        Ok(())
    }

    /// Drop the entry at `offset`, which belongs to `column`
    pub(crate) fn remove(&mut self, offset: usize, column: usize) {
        self.values.copy_within(offset + 1..self.cardinality, offset);
        self.row_indices
            .copy_within(offset + 1..self.cardinality, offset);
        self.cardinality -= 1;
        self.values[self.cardinality] = F::ZERO;
        self.row_indices[self.cardinality] = 0;

        for pointer in &mut self.column_pointers[column + 1..] {
            *pointer -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::CcsMatrix;
    use ccs_core::CcsError;

    #[test]
    fn test_insert_then_remove() {
        let mut matrix: CcsMatrix = CcsMatrix::new(4, 4).unwrap();

        matrix.set(2, 1, 5).unwrap();
        assert_eq!(matrix.get(2, 1).unwrap(), 5);
        assert_eq!(matrix.cardinality(), 1);
        assert_eq!(matrix.column_pointers(), &[0, 0, 1, 1, 1]);
        assert_eq!(matrix.non_zeros_in_column(1).unwrap(), 1);

        matrix.set(2, 1, 0).unwrap();
        assert_eq!(matrix.cardinality(), 0);
        assert_eq!(matrix.get(2, 1).unwrap(), 0);
        assert!(!matrix.non_zero_at(2, 1).unwrap());
        assert_eq!(matrix.column_pointers(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_overwrite_in_place() {
        let mut matrix: CcsMatrix = CcsMatrix::new(3, 3).unwrap();
        matrix.set(1, 1, 3).unwrap();
        matrix.set(1, 1, 8).unwrap();
        assert_eq!(matrix.get(1, 1).unwrap(), 8);
        assert_eq!(matrix.cardinality(), 1);
    }

    #[test]
    fn test_zero_on_empty_cell_is_noop() {
        let mut matrix: CcsMatrix = CcsMatrix::new(3, 3).unwrap();
        matrix.set(0, 0, 0).unwrap();
        assert_eq!(matrix.cardinality(), 0);
        assert_eq!(matrix.column_pointers(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_out_of_order_inserts_stay_sorted() {
        let mut matrix: CcsMatrix = CcsMatrix::new(5, 3).unwrap();
        matrix.set(4, 2, 1).unwrap();
        matrix.set(0, 0, 2).unwrap();
        matrix.set(3, 0, 3).unwrap();
        matrix.set(1, 0, 4).unwrap();
        matrix.set(2, 2, 5).unwrap();

        assert_eq!(matrix.values(), &[2, 4, 3, 5, 1]);
        assert_eq!(matrix.row_indices(), &[0, 1, 3, 2, 4]);
        assert_eq!(matrix.column_pointers(), &[0, 3, 3, 5]);

        matrix.set(1, 0, 0).unwrap();
        assert_eq!(matrix.values(), &[2, 3, 5, 1]);
        assert_eq!(matrix.column_pointers(), &[0, 2, 2, 4]);
        assert!(matrix.validate().is_ok());
    }

    #[test]
    fn test_bounds_are_checked() {
        let mut matrix: CcsMatrix = CcsMatrix::new(2, 3).unwrap();
        assert_eq!(
            matrix.get(2, 0).unwrap_err(),
            CcsError::RowOutOfBounds { row: 2, rows: 2 }
        );
        assert_eq!(
            matrix.set(0, 3, 1).unwrap_err(),
            CcsError::ColumnOutOfBounds {
                column: 3,
                columns: 3
            }
        );
        assert!(matrix.non_zeros_in_column_range(0, 1, 3).is_err());
    }

    #[test]
    fn test_point_update() {
        let mut matrix: CcsMatrix = CcsMatrix::new(3, 3).unwrap();

        matrix.update(1, 2, |_: usize, _: usize, value: u8| value + 6).unwrap();
        assert_eq!(matrix.get(1, 2).unwrap(), 6);

        matrix.update(1, 2, |_: usize, _: usize, value: u8| value * 2).unwrap();
        assert_eq!(matrix.get(1, 2).unwrap(), 12);

        matrix.update(1, 2, |_: usize, _: usize, _: u8| 0u8).unwrap();
        assert_eq!(matrix.cardinality(), 0);

        // an updater producing zero for an empty cell stores nothing
        matrix.update(0, 0, |_: usize, _: usize, value: u8| value).unwrap();
        assert_eq!(matrix.cardinality(), 0);
    }

    #[test]
    fn test_column_and_row_counts() {
        #[rustfmt::skip]
        let data = [
            1, 0, 1,
            0, 0, 1,
            1, 0, 1,
            1, 0, 0,
        ];
        let matrix: CcsMatrix = CcsMatrix::from_array(4, 3, &data).unwrap();

        assert_eq!(matrix.non_zeros_in_column(0).unwrap(), 3);
        assert_eq!(matrix.non_zeros_in_column(1).unwrap(), 0);
        assert_eq!(matrix.non_zeros_in_column_range(0, 1, 3).unwrap(), 1);
        assert_eq!(matrix.non_zeros_in_column_range(2, 0, 2).unwrap(), 2);
        assert_eq!(matrix.non_zeros_in_column_range(2, 2, 2).unwrap(), 0);
        assert_eq!(matrix.non_zeros_in_row(0).unwrap(), 2);
        assert_eq!(matrix.non_zeros_in_row(3).unwrap(), 1);
        assert_eq!(matrix.non_zeros(), 6);
    }
}

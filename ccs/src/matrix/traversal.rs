//! Visitor traversal and in-place bulk update
//!
//! Every traversal runs column by column with rows ascending. Dense
//! traversals report implicit zeros; sparse traversals report stored
//! entries only.

use ccs_core::{
    check_column, check_row_range, MatrixFunction, MatrixProcedure, OctetField, Result,
};

use super::cursor::EntryCursor;
use super::CcsMatrix;

impl<F: OctetField> CcsMatrix<F> {
    /// Visit every cell, zeros included
    pub fn each<P: MatrixProcedure>(&self, mut procedure: P) {
        for column in 0..self.columns {
            self.visit_column_dense(column, &mut procedure);
        }
    }

    /// Visit every cell of a column, zeros included
    pub fn each_in_column<P: MatrixProcedure>(&self, column: usize, mut procedure: P) -> Result<()> {
        check_column(column, self.columns)?;
        self.visit_column_dense(column, &mut procedure);
        Ok(())
    }

    /// Visit every stored entry
    pub fn each_non_zero<P: MatrixProcedure>(&self, mut procedure: P) {
        for column in 0..self.columns {
            let (start, end) = self.column_range(column);
            for offset in start..end {
                procedure.apply(self.row_indices[offset], column, self.values[offset]);
            }
        }
    }

    /// Visit every stored entry of a column
    pub fn each_non_zero_in_column<P: MatrixProcedure>(
        &self,
        column: usize,
        procedure: P,
    ) -> Result<()> {
        self.each_non_zero_in_column_range(column, 0, self.rows, procedure)
    }

    /// Visit the stored entries of a column within rows `from..to`
    pub fn each_non_zero_in_column_range<P: MatrixProcedure>(
        &self,
        column: usize,
        from: usize,
        to: usize,
        mut procedure: P,
    ) -> Result<()> {
        check_column(column, self.columns)?;
        check_row_range(from, to, self.rows)?;

        let (start, end) = self.column_range(column);
        for offset in self.locate(from, start, end)..end {
            let row = self.row_indices[offset];
            if row >= to {
                break;
            }
            procedure.apply(row, column, self.values[offset]);
        }
        Ok(())
    }

    /// Replace every stored entry with the updater's result
    ///
    /// Entries mapped to zero are removed during the scan.
    pub fn update_non_zero<G: MatrixFunction>(&mut self, mut function: G) {
        for column in 0..self.columns {
            if self.column_pointers[column] == self.cardinality {
                break;
            }
            self.update_column_range(column, 0, self.rows, &mut function);
        }
    }

    /// Replace every stored entry of a column with the updater's result
    pub fn update_non_zero_in_column<G: MatrixFunction>(
        &mut self,
        column: usize,
        function: G,
    ) -> Result<()> {
        self.update_non_zero_in_column_range(column, 0, self.rows, function)
    }

    /// Replace the stored entries of a column within rows `from..to`
    pub fn update_non_zero_in_column_range<G: MatrixFunction>(
        &mut self,
        column: usize,
        from: usize,
        to: usize,
        mut function: G,
    ) -> Result<()> {
        check_column(column, self.columns)?;
        check_row_range(from, to, self.rows)?;
        self.update_column_range(column, from, to, &mut function);
        Ok(())
    }

    /// Borrowing iterator over `(row, column, value)` of stored entries
    pub fn iter_non_zero(&self) -> NonZeroIter<'_, F> {
        NonZeroIter {
            matrix: self,
            column: 0,
            offset: 0,
        }
    }

    /// Walk a column against the row counter, filling gaps with zero
    fn visit_column_dense<P: MatrixProcedure>(&self, column: usize, procedure: &mut P) {
        let (mut offset, end) = self.column_range(column);
        for row in 0..self.rows {
            if offset < end && self.row_indices[offset] == row {
                procedure.apply(row, column, self.values[offset]);
                offset += 1;
            } else {
                procedure.apply(row, column, F::ZERO);
            }
        }
    }

    fn update_column_range<G: MatrixFunction>(
        &mut self,
        column: usize,
        from: usize,
        to: usize,
        function: &mut G,
    ) {
        let (start, end) = self.column_range(column);
        let mut cursor = EntryCursor::new(self.locate(from, start, end), end);

        while let Some(offset) = cursor.current() {
            let row = self.row_indices[offset];
            if row >= to {
                break;
            }

            let value = function.evaluate(row, column, self.values[offset]);
            if F::is_zero(value) {
                self.remove(offset, column);
                cursor.retire();
            } else {
                self.values[offset] = value;
                cursor.advance();
            }
        }
    }
}

/// Iterator over the stored entries of a [`CcsMatrix`]
///
/// Yields `(row, column, value)` in column-major, row-ascending order.
#[derive(Debug, Clone)]
pub struct NonZeroIter<'a, F: OctetField> {
    matrix: &'a CcsMatrix<F>,
    column: usize,
    offset: usize,
}

impl<'a, F: OctetField> Iterator for NonZeroIter<'a, F> {
    type Item = (usize, usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.matrix.cardinality {
            return None;
        }

        while self.offset >= self.matrix.column_pointers[self.column + 1] {
            self.column += 1;
        }

        let offset = self.offset;
        self.offset += 1;
        Some((
            self.matrix.row_indices[offset],
            self.column,
            self.matrix.values[offset],
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matrix.cardinality.saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl<'a, F: OctetField> ExactSizeIterator for NonZeroIter<'a, F> {}

#[cfg(test)]
mod tests {
    use crate::CcsMatrix;

    fn sample() -> CcsMatrix {
        #[rustfmt::skip]
        let data = [
            1, 0, 0,
            0, 0, 4,
            2, 0, 5,
            3, 0, 0,
        ];
        CcsMatrix::from_array(4, 3, &data).unwrap()
    }

    #[test]
    fn test_each_reports_every_cell() {
        let matrix = sample();
        let mut cells = Vec::new();
        matrix.each(|row: usize, column: usize, value: u8| cells.push((row, column, value)));

        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], (0, 0, 1));
        assert_eq!(cells[1], (1, 0, 0));
        assert_eq!(cells[4], (0, 1, 0));
        assert_eq!(cells[9], (1, 2, 4));
        assert_eq!(cells[11], (3, 2, 0));
    }

    #[test]
    fn test_each_in_column() {
        let matrix = sample();
        let mut values = Vec::new();
        matrix
            .each_in_column(2, |_: usize, _: usize, value: u8| values.push(value))
            .unwrap();
        assert_eq!(values, vec![0, 4, 5, 0]);
        assert!(matrix
            .each_in_column(3, |_: usize, _: usize, _: u8| {})
            .is_err());
    }

    #[test]
    fn test_each_non_zero() {
        let matrix = sample();
        let mut cells = Vec::new();
        matrix.each_non_zero(|row: usize, column: usize, value: u8| cells.push((row, column, value)));
        assert_eq!(
            cells,
            vec![(0, 0, 1), (2, 0, 2), (3, 0, 3), (1, 2, 4), (2, 2, 5)]
        );
        assert_eq!(matrix.iter_non_zero().collect::<Vec<_>>(), cells);
        assert_eq!(matrix.iter_non_zero().len(), 5);
    }

    #[test]
    fn test_each_non_zero_in_column_range() {
        let matrix = sample();
        let mut rows = Vec::new();
        matrix
            .each_non_zero_in_column_range(0, 1, 3, |row: usize, _: usize, _: u8| rows.push(row))
            .unwrap();
        assert_eq!(rows, vec![2]);

        rows.clear();
        matrix
            .each_non_zero_in_column(0, |row: usize, _: usize, _: u8| rows.push(row))
            .unwrap();
        assert_eq!(rows, vec![0, 2, 3]);

        assert!(matrix
            .each_non_zero_in_column_range(0, 3, 1, |_: usize, _: usize, _: u8| {})
            .is_err());
    }

    #[test]
    fn test_update_non_zero_removes_in_flight() {
        let mut matrix = sample();
        let mut visited = Vec::new();

        // drop odd values, double the rest
        matrix.update_non_zero(|row: usize, column: usize, value: u8| {
            visited.push((row, column));
            if value % 2 == 1 {
                0u8
            } else {
                value * 2
            }
        });

        assert_eq!(visited, vec![(0, 0), (2, 0), (3, 0), (1, 2), (2, 2)]);
        assert_eq!(matrix.cardinality(), 2);
        assert_eq!(matrix.get(2, 0).unwrap(), 4);
        assert_eq!(matrix.get(1, 2).unwrap(), 8);
        assert_eq!(matrix.column_pointers(), &[0, 1, 1, 2]);
        assert!(matrix.validate().is_ok());
    }

    #[test]
    fn test_update_non_zero_clears_everything() {
        let mut matrix = sample();
        let mut calls = 0;
        matrix.update_non_zero(|_: usize, _: usize, _: u8| {
            calls += 1;
            0u8
        });
        assert_eq!(calls, 5);
        assert_eq!(matrix.cardinality(), 0);
        assert_eq!(matrix.column_pointers(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_update_non_zero_in_column_range() {
        let mut matrix = sample();
        matrix
            .update_non_zero_in_column_range(0, 0, 3, |_: usize, _: usize, _: u8| 0u8)
            .unwrap();

        // row 3 lies outside the range and survives
        assert_eq!(matrix.non_zeros_in_column(0).unwrap(), 1);
        assert_eq!(matrix.get(3, 0).unwrap(), 3);
        assert_eq!(matrix.get(1, 2).unwrap(), 4);

        matrix
            .update_non_zero_in_column(2, |_: usize, _: usize, value: u8| value + 1)
            .unwrap();
        assert_eq!(matrix.get(1, 2).unwrap(), 5);
        assert_eq!(matrix.get(2, 2).unwrap(), 6);
        assert!(matrix.validate().is_ok());
    }
}

//! Row and column extraction

use ccs_core::{check_column, check_row, DenseVector, OctetField, Result, VectorFactory};

use super::CcsMatrix;
use crate::vector::CompressedVector;

impl<F: OctetField> CcsMatrix<F> {
    /// Copy a column into a compact sparse vector of `rows` positions
    ///
    /// Costs O(column size); no search is involved.
    pub fn column(&self, column: usize) -> Result<CompressedVector> {
        check_column(column, self.columns)?;

        let (start, end) = self.column_range(column);
        Ok(CompressedVector::from_column_parts(
            self.rows,
            self.values[start..end].to_vec(),
            self.row_indices[start..end].to_vec(),
        ))
    }

    /// Materialize a column into a vector created by `factory`
    pub fn column_with<V: VectorFactory>(&self, column: usize, factory: &V) -> Result<V::Vector> {
        check_column(column, self.columns)?;

        let mut vector = factory.create_vector(self.rows);
        let (start, end) = self.column_range(column);
        for offset in start..end {
            vector.set(self.row_indices[offset], self.values[offset]);
        }
        Ok(vector)
    }

    /// Materialize a row into a vector created by `factory`
    ///
    /// Rows are not indexed, so this performs one search per column:
    /// O(columns * log(column size)), against O(column size) for
    /// [`CcsMatrix::column_with`]. The scan stops at the first column past
    /// which no entries remain.
    pub fn row_with<V: VectorFactory>(&self, row: usize, factory: &V) -> Result<V::Vector> {
        check_row(row, self.rows)?;

        let mut vector = factory.create_vector(self.columns);
        let mut column = 0;
        while column < self.columns && self.column_pointers[column] < self.cardinality {
            let (offset, found) = self.find(row, column);
            if found {
                vector.set(column, self.values[offset]);
            }
            column += 1;
        }
        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use crate::{CcsMatrix, DenseVectorFactory};
    use ccs_core::{CcsError, SignedOctets};

    fn sample() -> CcsMatrix {
        #[rustfmt::skip]
        let data = [
            0, 7, 0, 0,
            1, 0, 0, 0,
            0, 8, 0, 2,
        ];
        CcsMatrix::from_array(3, 4, &data).unwrap()
    }

    #[test]
    fn test_column_as_compressed_vector() {
        let matrix = sample();
        let column = matrix.column(1).unwrap();
        assert_eq!(column.len(), 3);
        assert_eq!(column.values(), &[7, 8]);
        assert_eq!(column.indices(), &[0, 2]);

        let empty = matrix.column(2).unwrap();
        assert_eq!(empty.cardinality(), 0);
        assert_eq!(empty.to_dense(), vec![0, 0, 0]);
    }

    #[test]
    fn test_column_signed_field() {
        // 0x80 is the smallest signed symbol and must survive extraction
        let matrix =
            CcsMatrix::<SignedOctets>::from_array(3, 1, &[0x80, 0, 0xFF]).unwrap();
        let column = matrix.column(0).unwrap();
        assert_eq!(column.values(), &[0x80, 0xFF]);
        assert_eq!(column.indices(), &[0, 2]);
        assert_eq!(column.to_dense(), vec![0x80, 0, 0xFF]);
        assert_eq!(column.get(1).unwrap(), 0);
    }

    #[test]
    fn test_column_with_factory() {
        let matrix = sample();
        let column = matrix.column_with(3, &DenseVectorFactory).unwrap();
        assert_eq!(column.as_slice(), &[0, 0, 2]);
    }

    #[test]
    fn test_row_with_factory() {
        let matrix = sample();
        assert_eq!(
            matrix.row_with(0, &DenseVectorFactory).unwrap().as_slice(),
            &[0, 7, 0, 0]
        );
        assert_eq!(
            matrix.row_with(2, &DenseVectorFactory).unwrap().as_slice(),
            &[0, 8, 0, 2]
        );
        assert_eq!(
            matrix.row_with(3, &DenseVectorFactory).unwrap_err(),
            CcsError::RowOutOfBounds { row: 3, rows: 3 }
        );
    }

    #[test]
    fn test_row_with_trailing_empty_columns() {
        let mut matrix: CcsMatrix = CcsMatrix::new(2, 5).unwrap();
        matrix.set(1, 0, 4).unwrap();
        let row = matrix.row_with(1, &DenseVectorFactory).unwrap();
        assert_eq!(row.into_inner(), vec![4, 0, 0, 0, 0]);
    }
}

//! Capacity management for the entry buffers

use ccs_core::{dense_capacity, grown_capacity, CcsError, OctetField, Result};
use tracing::trace;

use super::CcsMatrix;

impl<F: OctetField> CcsMatrix<F> {
    /// Number of entries the buffers can hold without growing
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Largest number of entries this matrix can ever hold
    pub fn dense_capacity(&self) -> usize {
        dense_capacity(self.rows, self.columns)
    }

    /// Grow the entry buffers by roughly half
    ///
    /// The new capacity never exceeds the dense size. Asking a matrix that
    /// already holds that many slots to grow is an internal defect.
    pub(crate) fn grow(&mut self) -> Result<()> {
        let dense = self.dense_capacity();
        if self.values.len() >= dense {
            return Err(CcsError::CapacityExhausted);
        }

        let capacity = grown_capacity(self.cardinality, dense);
        trace!(
            from = self.values.len(),
            to = capacity,
            cardinality = self.cardinality,
            "growing entry buffers"
        );

        let mut values = vec![0u8; capacity];
        let mut row_indices = vec![0usize; capacity];
        values[..self.cardinality].copy_from_slice(&self.values[..self.cardinality]);
        row_indices[..self.cardinality].copy_from_slice(&self.row_indices[..self.cardinality]);

        self.values = values;
        self.row_indices = row_indices;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::CcsMatrix;
    use ccs_core::CcsError;

    #[test]
    fn test_grow_by_half() {
        let mut matrix: CcsMatrix = CcsMatrix::new(100, 100).unwrap();
        for row in 0..32 {
            matrix.set(row, 0, 1).unwrap();
        }
        assert_eq!(matrix.capacity(), 32);

        matrix.set(32, 0, 1).unwrap();
        assert_eq!(matrix.capacity(), 49);
        assert_eq!(matrix.cardinality(), 33);
        assert!(matrix.validate().is_ok());
    }

    #[test]
    fn test_grow_capped_at_dense_size() {
        let mut matrix: CcsMatrix = CcsMatrix::new(6, 6).unwrap();
        for row in 0..6 {
            for column in 0..6 {
                matrix.set(row, column, 9).unwrap();
            }
        }
        assert_eq!(matrix.cardinality(), 36);
        assert_eq!(matrix.capacity(), 36);
        assert_eq!(matrix.dense_capacity(), 36);
    }

    #[test]
    fn test_grow_exhausted() {
        let mut matrix: CcsMatrix =
            CcsMatrix::from_raw_parts(1, 2, vec![1, 1], vec![0, 0], vec![0, 1, 2]).unwrap();
        assert_eq!(matrix.grow().unwrap_err(), CcsError::CapacityExhausted);
    }

    #[test]
    fn test_small_matrix_never_grows() {
        let mut matrix: CcsMatrix = CcsMatrix::new(2, 2).unwrap();
        for row in 0..2 {
            for column in 0..2 {
                matrix.set(row, column, 1).unwrap();
            }
        }
        // the initial block already exceeds the dense size
        assert_eq!(matrix.capacity(), 32);
    }
}

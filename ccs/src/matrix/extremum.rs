//! Largest and smallest symbol under the field order

use ccs_core::{check_column, OctetField, Result};

use super::CcsMatrix;

impl<F: OctetField> CcsMatrix<F> {
    /// Largest symbol of the matrix, implicit zeros included
    pub fn max(&self) -> u8 {
        let dense = self.rows.saturating_mul(self.columns);
        extreme::<F>(self.values(), dense, F::min_element(), F::greater)
    }

    /// Smallest symbol of the matrix, implicit zeros included
    pub fn min(&self) -> u8 {
        let dense = self.rows.saturating_mul(self.columns);
        extreme::<F>(self.values(), dense, F::max_element(), F::less)
    }

    /// Largest symbol of a column, implicit zeros included
    pub fn max_in_column(&self, column: usize) -> Result<u8> {
        check_column(column, self.columns)?;
        let (start, end) = self.column_range(column);
        Ok(extreme::<F>(
            &self.values[start..end],
            self.rows,
            F::min_element(),
            F::greater,
        ))
    }

    /// Smallest symbol of a column, implicit zeros included
    pub fn min_in_column(&self, column: usize) -> Result<u8> {
        check_column(column, self.columns)?;
        let (start, end) = self.column_range(column);
        Ok(extreme::<F>(
            &self.values[start..end],
            self.rows,
            F::max_element(),
            F::less,
        ))
    }
}

/// Fold `stored` with `beats`, then account for the zeros a sparse scope holds
///
/// `dense` is the number of cells in the scope. Unless every cell is stored,
/// zero competes with the stored symbols.
fn extreme<F: OctetField>(stored: &[u8], dense: usize, seed: u8, beats: fn(u8, u8) -> bool) -> u8 {
    if dense == 0 {
        return F::ZERO;
    }

    let best = stored
        .iter()
        .fold(seed, |best, &value| if beats(value, best) { value } else { best });

    if stored.len() == dense || beats(best, F::ZERO) {
        best
    } else {
        F::ZERO
    }
}

#[cfg(test)]
mod tests {
    use crate::CcsMatrix;
    use ccs_core::{SignedOctets, UnsignedOctets};

    #[test]
    fn test_sparse_matrix_counts_zero() {
        let mut matrix: CcsMatrix = CcsMatrix::new(2, 2).unwrap();
        matrix.set(0, 0, 200).unwrap();
        assert_eq!(matrix.max(), 200);
        assert_eq!(matrix.min(), 0);
    }

    #[test]
    fn test_dense_matrix_ignores_zero() {
        let matrix: CcsMatrix = CcsMatrix::from_array(2, 2, &[9, 4, 7, 250]).unwrap();
        assert_eq!(matrix.max(), 250);
        assert_eq!(matrix.min(), 4);
    }

    #[test]
    fn test_empty_scopes_yield_zero() {
        let empty: CcsMatrix = CcsMatrix::new(3, 3).unwrap();
        assert_eq!(empty.max(), 0);
        assert_eq!(empty.min(), 0);
        assert_eq!(empty.max_in_column(1).unwrap(), 0);

        let degenerate: CcsMatrix = CcsMatrix::new(0, 4).unwrap();
        assert_eq!(degenerate.max(), 0);
        assert_eq!(degenerate.min_in_column(2).unwrap(), 0);
    }

    #[test]
    fn test_column_extremes() {
        #[rustfmt::skip]
        let data = [
            5, 1,
            9, 0,
        ];
        let matrix = CcsMatrix::<UnsignedOctets>::from_array(2, 2, &data).unwrap();

        // column 0 is fully stored
        assert_eq!(matrix.min_in_column(0).unwrap(), 5);
        assert_eq!(matrix.max_in_column(0).unwrap(), 9);
        // column 1 holds an implicit zero
        assert_eq!(matrix.min_in_column(1).unwrap(), 0);
        assert_eq!(matrix.max_in_column(1).unwrap(), 1);
        assert!(matrix.max_in_column(2).is_err());
    }

    #[test]
    fn test_signed_order() {
        // 200 is -56 and 100 is 100 in two's complement
        let mut matrix: CcsMatrix<SignedOctets> = CcsMatrix::new(2, 2).unwrap();
        matrix.set(0, 0, 200).unwrap();
        assert_eq!(matrix.max(), 0);
        assert_eq!(matrix.min(), 200);

        matrix.set(1, 1, 100).unwrap();
        assert_eq!(matrix.max(), 100);
        assert_eq!(matrix.min(), 200);

        let dense = CcsMatrix::<SignedOctets>::from_array(1, 2, &[200, 255]).unwrap();
        assert_eq!(dense.max(), 255);
        assert_eq!(dense.min(), 200);
    }
}

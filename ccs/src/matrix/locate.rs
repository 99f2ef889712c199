//! Lower-bound search over a column's row indices

use ccs_core::format::constants::LINEAR_SEARCH_THRESHOLD;
use ccs_core::OctetField;
use std::cmp::Ordering;

use super::CcsMatrix;

/// First offset in `[left, right)` whose row is not less than `row`
///
/// Returns `right` when every row in the range is smaller. Ranges of at
/// least [`LINEAR_SEARCH_THRESHOLD`] entries are halved; narrower ranges
/// are scanned. Rows are unique within a column, so an exact hit while
/// halving is already the lower bound.
pub(crate) fn lower_bound(row_indices: &[usize], row: usize, left: usize, right: usize) -> usize {
    let (mut left, mut right) = (left, right);

    while right - left >= LINEAR_SEARCH_THRESHOLD {
        let middle = left + (right - left) / 2;
        match row_indices[middle].cmp(&row) {
            Ordering::Greater => right = middle,
            Ordering::Less => left = middle + 1,
            Ordering::Equal => return middle,
        }
    }

    while left < right && row_indices[left] < row {
        left += 1;
    }
    left
}

impl<F: OctetField> CcsMatrix<F> {
    /// Locate `row` within the entry range `[left, right)`
    #[inline]
    pub(crate) fn locate(&self, row: usize, left: usize, right: usize) -> usize {
        lower_bound(&self.row_indices, row, left, right)
    }

    /// Offset of the entry at `(row, column)`, or the insertion offset
    ///
    /// The flag tells whether the entry exists. Indices must be in bounds.
    #[inline]
    pub(crate) fn find(&self, row: usize, column: usize) -> (usize, bool) {
        let (start, end) = self.column_range(column);
        let offset = self.locate(row, start, end);
        (offset, offset < end && self.row_indices[offset] == row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound_linear_range() {
        let rows = [1, 3, 5];
        assert_eq!(lower_bound(&rows, 0, 0, 3), 0);
        assert_eq!(lower_bound(&rows, 3, 0, 3), 1);
        assert_eq!(lower_bound(&rows, 4, 0, 3), 2);
        assert_eq!(lower_bound(&rows, 9, 0, 3), 3);
        assert_eq!(lower_bound(&rows, 9, 1, 1), 1);
    }

    #[test]
    fn test_lower_bound_matches_partition_point() {
        let rows: Vec<usize> = (0..200).map(|i| i * 3 + 1).collect();
        for target in 0..610 {
            let expected = rows.partition_point(|&r| r < target);
            assert_eq!(lower_bound(&rows, target, 0, rows.len()), expected, "row {target}");
        }
    }

    #[test]
    fn test_lower_bound_respects_sub_range() {
        // two columns sharing one buffer: [0, 4, 9] and [2, 3, 4, 5, 6, 7, 8, 9, 11]
        let rows = [0, 4, 9, 2, 3, 4, 5, 6, 7, 8, 9, 11];
        assert_eq!(lower_bound(&rows, 4, 0, 3), 1);
        assert_eq!(lower_bound(&rows, 10, 0, 3), 3);
        assert_eq!(lower_bound(&rows, 1, 3, 12), 3);
        assert_eq!(lower_bound(&rows, 10, 3, 12), 11);
        assert_eq!(lower_bound(&rows, 12, 3, 12), 12);
    }
}

//! Vector types produced by row and column extraction

use ccs_core::{CcsError, DenseVector, Result, VectorFactory};

/// Compact sparse vector: sorted positions with their non-zero symbols
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressedVector {
    length: usize,
    values: Vec<u8>,
    indices: Vec<usize>,
}

impl CompressedVector {
    /// Create an all-zero vector of `length` positions
    pub fn new(length: usize) -> Self {
        Self {
            length,
            values: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Build a vector from sorted positions and their symbols
    pub fn from_parts(length: usize, values: Vec<u8>, indices: Vec<usize>) -> Result<Self> {
        if values.len() != indices.len()
            || indices.iter().any(|&index| index >= length)
            || indices.windows(2).any(|pair| pair[0] >= pair[1])
            || values.contains(&0)
        {
            return Err(CcsError::CorruptedData);
        }

        Ok(Self {
            length,
            values,
            indices,
        })
    }

    /// Assemble from a column slice already known to be sorted and zero-free
    pub(crate) fn from_column_parts(length: usize, values: Vec<u8>, indices: Vec<usize>) -> Self {
        debug_assert_eq!(values.len(), indices.len());
        Self {
            length,
            values,
            indices,
        }
    }

    /// Number of positions, stored or not
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of stored symbols
    pub fn cardinality(&self) -> usize {
        self.values.len()
    }

    /// Symbol at `index`; unstored positions read as zero
    pub fn get(&self, index: usize) -> Result<u8> {
        if index >= self.length {
            return Err(CcsError::RowOutOfBounds {
                row: index,
                rows: self.length,
            });
        }

        Ok(match self.indices.binary_search(&index) {
            Ok(offset) => self.values[offset],
            Err(_) => 0,
        })
    }

    /// Stored symbols in position order
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Positions of the stored symbols
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterate over `(index, value)` of stored symbols
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Expand into a dense byte vector
    pub fn to_dense(&self) -> Vec<u8> {
        let mut dense = vec![0; self.length];
        for (index, value) in self.iter() {
            dense[index] = value;
        }
        dense
    }
}

/// Plain dense vector backed by a byte buffer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DenseOctetVector(Vec<u8>);

impl DenseOctetVector {
    /// Create an all-zero vector
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for DenseOctetVector {
    fn from(values: Vec<u8>) -> Self {
        Self(values)
    }
}

impl DenseVector for DenseOctetVector {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, index: usize) -> u8 {
        self.0[index]
    }

    fn set(&mut self, index: usize, value: u8) {
        self.0[index] = value;
    }
}

/// Factory producing [`DenseOctetVector`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseVectorFactory;

impl VectorFactory for DenseVectorFactory {
    type Vector = DenseOctetVector;

    fn create_vector(&self, len: usize) -> Self::Vector {
        DenseOctetVector::zeros(len)
    }
}

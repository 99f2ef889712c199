//! Dense vector output abstractions
//!
//! Row and column extraction materializes into a vector type chosen by the
//! caller. The factory decides the representation; the matrix only writes
//! the non-zero positions into a freshly created, all-zero vector.

/// Mutable dense vector of octet symbols
pub trait DenseVector {
    /// Number of positions in the vector
    fn len(&self) -> usize;

    /// Whether the vector has no positions
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Symbol at `index`
    fn get(&self, index: usize) -> u8;

    /// Overwrite the symbol at `index`
    fn set(&mut self, index: usize, value: u8);
}

/// Allocator for dense vectors
pub trait VectorFactory {
    /// The vector type produced by this factory
    type Vector: DenseVector;

    /// Create an all-zero vector of `len` positions
    fn create_vector(&self, len: usize) -> Self::Vector;
}

//! CCS - Compressed Column Storage Octet Matrix
//!
//! This library provides a sparse matrix over a 256-symbol field, stored in
//! compressed column layout, together with a flat binary codec.
//!
//! ## Architecture
//!
//! CCS follows the same definition/implementation split as its core crate:
//!
//! - **ccs-core**: field ordering, collaborator traits, error taxonomy,
//!   wire header/record layouts and validation rules (no I/O, `no_std`)
//! - **ccs**: the matrix itself, sources, vectors, and the stream codec
//!
//! ## Quick Start
//!
//! ```rust
//! use ccs::{CcsMatrix, DenseVectorFactory};
//!
//! fn example() -> ccs::Result<()> {
//!     let mut matrix: CcsMatrix = CcsMatrix::new(4, 4)?;
//!     matrix.set(2, 1, 0x5A)?;
//!     matrix.set(0, 1, 0x03)?;
//!
//!     assert_eq!(matrix.get(2, 1)?, 0x5A);
//!     assert_eq!(matrix.non_zeros_in_column(1)?, 2);
//!
//!     let row = matrix.row_with(2, &DenseVectorFactory)?;
//!     assert_eq!(row.as_slice(), &[0, 0x5A, 0, 0]);
//!
//!     let bytes = matrix.to_bytes()?;
//!     let restored: CcsMatrix = CcsMatrix::from_bytes(&bytes)?;
//!     assert_eq!(restored, matrix);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Column-indexed access**: binary search within a column, linear
//!   scans below a small threshold
//! - **In-place bulk updates**: entries mapped to zero are removed during
//!   the scan
//! - **Validated deserialization**: malformed input is rejected, never
//!   turned into a broken matrix
//! - **serde** (default feature): matrices serialize as shape plus entries

// Re-export core abstractions and format definitions
pub use ccs_core::{
    // Field ordering
    OctetField, SignedOctets, UnsignedOctets,
    // Collaborator traits
    DenseVector, MatrixFunction, MatrixProcedure, MatrixSource, SparseMatrix, VectorFactory,
    // Format definitions
    EntryRecord, WireHeader,
    // Error handling
    CcsError, ErrorCategory,
};

// Implementation modules
pub mod codec;
pub mod config;
pub mod error;
pub mod matrix;
#[cfg(feature = "serde")]
pub mod parts;
pub mod source;
pub mod vector;

// Public exports
pub use config::{CodecConfig, OrderPolicy};
pub use error::{Error, Result};
pub use matrix::{CcsMatrix, NonZeroIter};
pub use source::{ArraySource, NestedArraySource};
pub use vector::{CompressedVector, DenseOctetVector, DenseVectorFactory};

#[cfg(feature = "serde")]
pub use parts::MatrixParts;

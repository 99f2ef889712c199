//! Abstract interfaces for CCS matrices
//!
//! This module defines the collaborator abstractions a matrix consumes.
//! Traits are pure interfaces; the field markers are the only implementations.

pub mod field;
pub mod functor;
pub mod matrix;
pub mod vector;

pub use field::{OctetField, SignedOctets, UnsignedOctets};
pub use functor::{MatrixFunction, MatrixProcedure};
pub use matrix::{MatrixSource, SparseMatrix};
pub use vector::{DenseVector, VectorFactory};

#![no_std]

//! CCS Core - Compressed Column Storage Octet Matrix Definitions
//!
//! This crate provides the collaborator traits, error taxonomy, wire format
//! and validation rules shared by compressed-column matrices over a
//! 256-symbol field. It performs no allocation unless the `alloc` feature
//! is enabled.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::*;

//! Errors raised by stream I/O on top of the core matrix errors

use ccs_core::{CcsError, ErrorCategory};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("matrix error: {0}")]
    Matrix(#[from] CcsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Category of the underlying matrix error, if any
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Error::Matrix(error) => Some(error.category()),
            Error::Io(_) => None,
        }
    }

    /// The core matrix error, if this is one
    pub fn as_matrix_error(&self) -> Option<CcsError> {
        match self {
            Error::Matrix(error) => Some(*error),
            Error::Io(_) => None,
        }
    }
}

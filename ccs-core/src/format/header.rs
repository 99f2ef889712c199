//! Wire header and entry record definitions
//!
//! A serialized matrix is a header followed by one record per stored entry.
//! All integers are big-endian signed 32-bit values.

use super::constants::wire::{HEADER_SIZE, RECORD_SIZE};
use crate::{CcsError, Result};

#[cfg(feature = "alloc")]
extern crate alloc;

/// Read a big-endian int32 at `offset` and reject negative values
fn read_index(bytes: &[u8], offset: usize) -> Result<usize> {
    let raw = i32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]);
    usize::try_from(raw).map_err(|_| CcsError::CorruptedData)
}

/// Convert an in-memory index to its wire representation
fn write_index(value: usize) -> Result<[u8; 4]> {
    let raw = i32::try_from(value).map_err(|_| CcsError::CorruptedData)?;
    Ok(raw.to_be_bytes())
}

/// Serialized matrix header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireHeader {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// Number of records that follow
    pub cardinality: usize,
}

impl WireHeader {
    /// Size of the header in bytes
    pub const SIZE: usize = HEADER_SIZE;

    /// Create a header
    pub const fn new(rows: usize, columns: usize, cardinality: usize) -> Self {
        Self {
            rows,
            columns,
            cardinality,
        }
    }

    /// Parse header from bytes
    ///
    /// Negative fields and a cardinality above the dense size are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(CcsError::TruncatedInput);
        }

        let header = Self {
            rows: read_index(bytes, 0)?,
            columns: read_index(bytes, 4)?,
            cardinality: read_index(bytes, 8)?,
        };

        let dense = header
            .rows
            .checked_mul(header.columns)
            .ok_or(CcsError::CorruptedData)?;
        if header.cardinality > dense {
            return Err(CcsError::CorruptedData);
        }

        Ok(header)
    }

    /// Convert header to a byte array
    pub fn to_bytes_array(&self) -> Result<[u8; Self::SIZE]> {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&write_index(self.rows)?);
        bytes[4..8].copy_from_slice(&write_index(self.columns)?);
        bytes[8..12].copy_from_slice(&write_index(self.cardinality)?);
        Ok(bytes)
    }

    /// Convert header to bytes (requires alloc feature)
    #[cfg(feature = "alloc")]
    pub fn to_bytes(&self) -> Result<alloc::vec::Vec<u8>> {
        Ok(self.to_bytes_array()?.to_vec())
    }

    /// Total serialized length of a matrix with this header
    pub fn encoded_len(&self) -> Option<usize> {
        self.cardinality
            .checked_mul(RECORD_SIZE)
            .and_then(|records| records.checked_add(Self::SIZE))
    }
}

/// One stored entry on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryRecord {
    pub row: usize,
    pub column: usize,
    pub value: u8,
}

impl EntryRecord {
    /// Size of a record in bytes
    pub const SIZE: usize = RECORD_SIZE;

    pub const fn new(row: usize, column: usize, value: u8) -> Self {
        Self { row, column, value }
    }

    /// Parse a record from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(CcsError::TruncatedInput);
        }

        Ok(Self {
            row: read_index(bytes, 0)?,
            column: read_index(bytes, 4)?,
            value: bytes[8],
        })
    }

    /// Convert record to a byte array
    pub fn to_bytes_array(&self) -> Result<[u8; Self::SIZE]> {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&write_index(self.row)?);
        bytes[4..8].copy_from_slice(&write_index(self.column)?);
        bytes[8] = self.value;
        Ok(bytes)
    }

    /// Column-major, row-ascending sort key
    pub const fn position(&self) -> (usize, usize) {
        (self.column, self.row)
    }
}

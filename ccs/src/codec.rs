//! Flat binary serialization
//!
//! Layout, all integers big-endian int32:
//!
//! ```text
//! rows | columns | cardinality | cardinality x (row | column | value byte)
//! ```
//!
//! Records are written column by column with rows ascending. Reading
//! validates everything: header fields, record coordinates, stored zeros
//! and record order (see [`OrderPolicy`]). Column pointers are rebuilt
//! from per-column record counts.

use std::io::{ErrorKind, Read, Write};

use ccs_core::{
    align_to_block, check_cardinality, check_dimensions, validate_record, validate_record_order,
    CcsError, EntryRecord, OctetField, WireHeader,
};
use tracing::{debug, warn};

use crate::config::{CodecConfig, OrderPolicy};
use crate::error::{Error, Result};
use crate::CcsMatrix;

impl<F: OctetField> CcsMatrix<F> {
    /// Write the header and every stored entry to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let header = WireHeader::new(self.rows(), self.columns(), self.cardinality());
        writer.write_all(&header.to_bytes_array()?)?;

        for (row, column, value) in self.iter_non_zero() {
            let record = EntryRecord::new(row, column, value);
            writer.write_all(&record.to_bytes_array()?)?;
        }

        debug!(
            rows = header.rows,
            columns = header.columns,
            cardinality = header.cardinality,
            "serialized matrix"
        );
        Ok(())
    }

    /// Serialize into a freshly allocated buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let header = WireHeader::new(self.rows(), self.columns(), self.cardinality());
        let mut bytes = Vec::with_capacity(header.encoded_len().unwrap_or(WireHeader::SIZE));
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Read a matrix with the default [`CodecConfig`]
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        Self::read_from_with(reader, &CodecConfig::default())
    }

    /// Read a matrix, validating it under `config`
    pub fn read_from_with<R: Read>(reader: &mut R, config: &CodecConfig) -> Result<Self> {
        let mut header_bytes = [0u8; WireHeader::SIZE];
        read_exact(reader, &mut header_bytes)?;
        let header = WireHeader::from_bytes(&header_bytes).map_err(rejected)?;
        check_dimensions(header.rows, header.columns).map_err(rejected)?;

        // the header is untrusted until the records actually arrive
        let mut records = Vec::with_capacity(header.cardinality.min(config.preallocation_limit));
        let mut record_bytes = [0u8; EntryRecord::SIZE];
        for _ in 0..header.cardinality {
            read_exact(reader, &mut record_bytes)?;
            records.push(EntryRecord::from_bytes(&record_bytes).map_err(rejected)?);
        }

        let matrix =
            Self::from_records(header.rows, header.columns, records, config).map_err(rejected)?;
        debug!(
            rows = header.rows,
            columns = header.columns,
            cardinality = header.cardinality,
            "deserialized matrix"
        );
        Ok(matrix)
    }

    /// Read a matrix from a complete buffer
    ///
    /// Bytes left over after the last record are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = bytes;
        let matrix = Self::read_from(&mut reader)?;
        if !reader.is_empty() {
            warn!(trailing = reader.len(), "rejected serialized matrix");
            return Err(CcsError::CorruptedData.into());
        }
        Ok(matrix)
    }

    /// Assemble a matrix from entry records
    ///
    /// Every record must lie inside `rows x columns` and hold a non-zero
    /// symbol. Ordering follows `config.order_policy`; a position may
    /// appear at most once under either policy.
    pub fn from_records(
        rows: usize,
        columns: usize,
        mut records: Vec<EntryRecord>,
        config: &CodecConfig,
    ) -> ccs_core::Result<Self> {
        check_cardinality(rows, columns, records.len())?;
        for record in &records {
            validate_record(record, rows, columns)?;
        }

        if config.order_policy == OrderPolicy::Sort {
            records.sort_unstable_by_key(EntryRecord::position);
        }
        for pair in records.windows(2) {
            validate_record_order(&pair[0], &pair[1])?;
        }

        let cardinality = records.len();
        let capacity = align_to_block(cardinality);
        let mut values = vec![0u8; capacity];
        let mut row_indices = vec![0usize; capacity];
        let mut column_pointers = vec![0usize; columns + 1];

        for (offset, record) in records.iter().enumerate() {
            values[offset] = record.value;
            row_indices[offset] = record.row;
            column_pointers[record.column + 1] += 1;
        }
        for column in 0..columns {
            column_pointers[column + 1] += column_pointers[column];
        }

        Ok(Self::from_parts(
            rows,
            columns,
            cardinality,
            values,
            row_indices,
            column_pointers,
        ))
    }

    /// Stored entries as records, in serialization order
    pub fn records(&self) -> Vec<EntryRecord> {
        self.iter_non_zero()
            .map(|(row, column, value)| EntryRecord::new(row, column, value))
            .collect()
    }
}

fn read_exact<R: Read>(reader: &mut R, buffer: &mut [u8]) -> Result<()> {
    reader.read_exact(buffer).map_err(|error| {
        if error.kind() == ErrorKind::UnexpectedEof {
            warn!("serialized matrix ended early");
            Error::Matrix(CcsError::TruncatedInput)
        } else {
            Error::Io(error)
        }
    })
}

fn rejected(error: CcsError) -> Error {
    warn!(%error, "rejected serialized matrix");
    Error::Matrix(error)
}

//! Serde support for [`CcsMatrix`]
//!
//! A matrix serializes as its shape plus the list of stored entries, and
//! deserializes through the same validation as the binary codec.

use ccs_core::{EntryRecord, OctetField};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::CodecConfig;
use crate::CcsMatrix;

/// Shape and entries of a matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixParts {
    pub rows: usize,
    pub columns: usize,
    pub entries: Vec<EntryRecord>,
}

impl<F: OctetField> From<&CcsMatrix<F>> for MatrixParts {
    fn from(matrix: &CcsMatrix<F>) -> Self {
        Self {
            rows: matrix.rows(),
            columns: matrix.columns(),
            entries: matrix.records(),
        }
    }
}

impl<F: OctetField> TryFrom<MatrixParts> for CcsMatrix<F> {
    type Error = ccs_core::CcsError;

    fn try_from(parts: MatrixParts) -> Result<Self, Self::Error> {
        CcsMatrix::from_records(
            parts.rows,
            parts.columns,
            parts.entries,
            &CodecConfig::default(),
        )
    }
}

impl<F: OctetField> Serialize for CcsMatrix<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatrixParts::from(self).serialize(serializer)
    }
}

impl<'de, F: OctetField> Deserialize<'de> for CcsMatrix<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parts = MatrixParts::deserialize(deserializer)?;
        CcsMatrix::try_from(parts).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut matrix: CcsMatrix = CcsMatrix::new(3, 2).unwrap();
        matrix.set(2, 0, 9).unwrap();
        matrix.set(0, 1, 4).unwrap();

        let json = serde_json::to_string(&matrix).unwrap();
        let restored: CcsMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, matrix);

        let parts: MatrixParts = serde_json::from_str(&json).unwrap();
        assert_eq!(parts.entries.len(), 2);
        assert_eq!(parts.entries[0], EntryRecord::new(2, 0, 9));
    }

    #[test]
    fn test_json_rejects_invalid_entries() {
        let json = r#"{"rows":2,"columns":2,"entries":[{"row":5,"column":0,"value":1}]}"#;
        let error = serde_json::from_str::<CcsMatrix>(json).unwrap_err();
        assert!(error.to_string().contains("corruption"));
    }
}

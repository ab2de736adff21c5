//! Error types for listing encode and decode

use std::fmt;

use thiserror::Error;

/// Record text field named in size violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Name,
    Author,
    Identifier,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Author => write!(f, "author"),
            Self::Identifier => write!(f, "identifier"),
        }
    }
}

/// Errors that can occur when encoding or decoding a listing
///
/// Every variant is terminal: encode returns a complete buffer or no buffer,
/// decode returns a complete listing or no listing. Variants carry the
/// offending index and the expected/observed values so callers can report
/// the failure without re-deriving state.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Listing has more records than the container can hold
    #[error("listing has {records} records but the container holds at most {max_records}")]
    CapacityExceeded { records: usize, max_records: usize },

    /// A text field's encoded length exceeds its fixed slot
    #[error("record {index}: {field} needs {len} bytes encoded (slot is {max})")]
    FieldTooLarge {
        index: usize,
        field: RecordField,
        len: usize,
        max: usize,
    },

    /// Identifier contains non-ASCII characters and would not round-trip
    #[error("record {index}: identifier is not ASCII")]
    NonAsciiIdentifier { index: usize },

    /// Buffer is shorter than the header or the declared record range
    #[error("buffer truncated: need {needed} bytes, got {actual}")]
    TruncatedBuffer { needed: u64, actual: u64 },

    /// Header signature mismatch; the buffer is not a listing texture
    #[error("invalid magic: expected {expected:08X?}, found {found:08X?}")]
    InvalidMagic {
        expected: [u32; 4],
        found: [u32; 4],
    },

    /// Layout version this codec does not understand
    #[error("unsupported format version {version}")]
    UnsupportedVersion { version: u32 },

    /// Container capacity is not a positive multiple of the slot size
    #[error("container capacity {capacity} is not a positive multiple of 512")]
    InvalidCapacity { capacity: usize },
}

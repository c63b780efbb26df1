//! Error types for block decoding and stream framing.

use std::io;
use thiserror::Error;

/// A malformed or schema-violating block.
///
/// Always fatal to the block being decoded. The caller decides whether
/// the rest of the stream is still worth reading.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The protobuf envelope could not be decoded.
    #[error("malformed protobuf message: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Two arrays that must be read in lockstep have different lengths.
    #[error("length mismatch in {field}: expected {expected}, found {found}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A required string reference does not resolve in the string table.
    #[error("string table has no entry at index {index}")]
    MissingString { index: i64 },

    /// A tag key without a matching value in a dense `keys_vals` stream.
    #[error("dense tag stream ended inside a key/value pair")]
    KeyWithoutValue,

    /// A coordinate or timestamp whose scaled value does not fit in an `i64`.
    #[error("{field} value {raw} overflows when scaled")]
    Overflow { field: &'static str, raw: i64 },

    /// A tag key repeated within the tags of a single element.
    #[error("duplicate tag key {0:?}")]
    DuplicateTag(String),

    /// A relation member type outside of node, way and relation.
    #[error("unknown relation member type {0}")]
    UnknownMemberType(i32),

    /// The header requires features this decoder cannot honour.
    #[error("unsupported required features: {}", .0.join(", "))]
    UnsupportedFeatures(Vec<String>),
}

/// Failures while reading blocks off a byte stream.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),

    #[error("blob header of {0} bytes exceeds the permitted maximum")]
    HeaderTooLarge(usize),

    #[error("blob of {0} bytes exceeds the permitted maximum")]
    BlobTooLarge(usize),

    #[error("blob header declares a negative size of {0}")]
    InvalidBlobSize(i32),

    #[error("blob uses unsupported compression: {0}")]
    UnsupportedCompression(&'static str),

    #[error("could not inflate blob: {0}")]
    Decompress(io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl From<prost::DecodeError> for CodecError {
    fn from(value: prost::DecodeError) -> Self {
        CodecError::Format(FormatError::Decode(value))
    }
}

//! Canonical wire encoding shared by every ledger record.
//!
//! Records are encoded with bincode using fixed-width little-endian integers
//! and `u64` length prefixes for sequences and byte strings. Trailing bytes
//! are rejected so that every accepted byte string has exactly one decoding.
//! Digests are computed over this same byte layout.

use crate::config::CodecConfig;
use crate::error::{RecordError, Result};
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

/// Encode a record into its canonical byte representation.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    wire_options()
        .serialize(value)
        .map_err(|e| RecordError::Encoding(e.to_string()))
}

/// Decode a record using the default codec limits.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    decode_with(bytes, &CodecConfig::default())
}

/// Decode a record, rejecting inputs larger than `config.max_record_bytes`.
pub fn decode_with<T: DeserializeOwned>(bytes: &[u8], config: &CodecConfig) -> Result<T> {
    let len = bytes.len() as u64;
    if len > config.max_record_bytes {
        warn!(
            len,
            limit = config.max_record_bytes,
            "rejecting oversized record"
        );
        return Err(RecordError::MalformedRecord(format!(
            "record of {len} bytes exceeds limit of {} bytes",
            config.max_record_bytes
        )));
    }

    wire_options()
        .with_limit(config.max_record_bytes)
        .deserialize(bytes)
        .map_err(|e| {
            debug!(len, error = %e, "failed to decode record");
            RecordError::MalformedRecord(e.to_string())
        })
}

/// Serialized size of a record in the canonical encoding.
pub fn encoded_len<T: Serialize + ?Sized>(value: &T) -> Result<u64> {
    wire_options()
        .serialized_size(value)
        .map_err(|e| RecordError::Encoding(e.to_string()))
}

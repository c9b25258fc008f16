//! Error types for ledger records

use crate::primitives::AccountName;
use thiserror::Error;

/// Failure to decode or encode a record in the canonical wire format.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("record encoding failed: {0}")]
    Encoding(String),
}

/// Failure to verify a producer confirmation or a signed header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationError {
    #[error("producer {0} is not in the active schedule")]
    UnknownProducer(AccountName),

    #[error("signature from {producer} does not match block {block_id}")]
    InvalidSignature {
        producer: AccountName,
        block_id: String,
    },
}

/// Violation of a strict block extension policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    #[error("unknown block extension tag {0}")]
    UnknownExtension(u16),

    #[error("block extension tag {0} appears more than once")]
    DuplicateExtension(u16),
}

/// Errors that can occur when parsing a producer account name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountNameError {
    #[error("account name must not be empty")]
    Empty,
    #[error("account name must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
    #[error("account name contains invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("account name must not start or end with '.'")]
    EdgeDot,
}

/// Failure to load a record configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, RecordError>;

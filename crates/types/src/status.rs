//! Transaction outcome taxonomy.
//!
//! When a transaction is referenced by a block it carries exactly one
//! [`TransactionStatus`] describing what the producer did with it and one
//! [`TransactionKind`] describing where it came from. Both encode as a single
//! byte; the discriminants are part of the protocol and must not be reordered.

use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a transaction's attempted execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum TransactionStatus {
    /// Applied successfully; state changes committed.
    Executed = 0,
    /// Objectively failed; no state change, fees may still be charged.
    SoftFail = 1,
    /// Failed and the error handler failed too; no state change at all.
    HardFail = 2,
    /// Never executed because its validity window elapsed.
    Expired = 3,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 4] = [
        TransactionStatus::Executed,
        TransactionStatus::SoftFail,
        TransactionStatus::HardFail,
        TransactionStatus::Expired,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Executed => "executed",
            TransactionStatus::SoftFail => "soft_fail",
            TransactionStatus::HardFail => "hard_fail",
            TransactionStatus::Expired => "expired",
        }
    }

    /// Only executed transactions commit their state changes.
    pub fn commits_state(self) -> bool {
        matches!(self, TransactionStatus::Executed)
    }

    /// Whether resource usage or fees may be deducted from the submitter.
    pub fn may_charge_resources(self) -> bool {
        matches!(
            self,
            TransactionStatus::Executed | TransactionStatus::SoftFail
        )
    }

    /// Expired transactions hand their reserved resources back.
    pub fn releases_reserved_resources(self) -> bool {
        matches!(self, TransactionStatus::Expired)
    }

    pub fn is_failure(self) -> bool {
        matches!(
            self,
            TransactionStatus::SoftFail | TransactionStatus::HardFail
        )
    }
}

impl From<TransactionStatus> for u8 {
    fn from(value: TransactionStatus) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for TransactionStatus {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TransactionStatus::Executed),
            1 => Ok(TransactionStatus::SoftFail),
            2 => Ok(TransactionStatus::HardFail),
            3 => Ok(TransactionStatus::Expired),
            other => Err(RecordError::MalformedRecord(format!(
                "unknown transaction status {other}"
            ))),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| RecordError::MalformedRecord(format!("unknown transaction status {s:?}")))
    }
}

/// Provenance of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum TransactionKind {
    /// Submitted directly by an external actor.
    Input = 0,
    /// Synthesized by the chain itself, e.g. deferred execution.
    Delay = 1,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Input, TransactionKind::Delay];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Input => "input",
            TransactionKind::Delay => "delay",
        }
    }
}

impl From<TransactionKind> for u8 {
    fn from(value: TransactionKind) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for TransactionKind {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TransactionKind::Input),
            1 => Ok(TransactionKind::Delay),
            other => Err(RecordError::MalformedRecord(format!(
                "unknown transaction kind {other}"
            ))),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RecordError::MalformedRecord(format!("unknown transaction kind {s:?}")))
    }
}

/// The (status, kind) pair classifying a receipt.
///
/// The default value is `hard_fail`/`input`. It marks an uninitialized
/// receipt and is never a stand-in for a successful outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptHeader {
    pub status: TransactionStatus,
    pub kind: TransactionKind,
}

impl ReceiptHeader {
    pub fn new(status: TransactionStatus, kind: TransactionKind) -> Self {
        Self { status, kind }
    }

    /// Header for a user-submitted transaction with the given status.
    pub fn input(status: TransactionStatus) -> Self {
        Self::new(status, TransactionKind::Input)
    }

    /// Header for a chain-generated transaction with the given status.
    pub fn delay(status: TransactionStatus) -> Self {
        Self::new(status, TransactionKind::Delay)
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for ReceiptHeader {
    fn default() -> Self {
        Self::new(TransactionStatus::HardFail, TransactionKind::Input)
    }
}

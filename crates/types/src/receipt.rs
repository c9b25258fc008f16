//! Transaction receipts.
//!
//! A [`TransactionReceipt`] records what the block producer did with one
//! transaction: the outcome header plus the transaction payload itself. The
//! receipt digest commits to the outcome and to the payload's own digest, so
//! it can be recomputed without re-hashing the payload bytes.

use crate::primitives::Digest;
use crate::status::{ReceiptHeader, TransactionKind, TransactionStatus};
use crate::transaction::{PackedDigest, PackedTransaction};
use blake3::Hasher as Blake3;
use serde::{Deserialize, Serialize};

/// Outcome of one transaction within a block.
///
/// Encodes as `(status, kind, trx)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt<T = PackedTransaction> {
    header: ReceiptHeader,
    trx: T,
}

impl<T> TransactionReceipt<T> {
    /// Receipt for a user transaction that executed successfully.
    ///
    /// This is the only constructor that picks a status on the caller's
    /// behalf. Every failure outcome goes through [`Self::with_header`].
    pub fn executed(trx: T) -> Self {
        Self {
            header: ReceiptHeader::input(TransactionStatus::Executed),
            trx,
        }
    }

    pub fn with_header(header: ReceiptHeader, trx: T) -> Self {
        Self { header, trx }
    }

    pub fn new(status: TransactionStatus, kind: TransactionKind, trx: T) -> Self {
        Self::with_header(ReceiptHeader::new(status, kind), trx)
    }

    pub fn header(&self) -> ReceiptHeader {
        self.header
    }

    pub fn status(&self) -> TransactionStatus {
        self.header.status
    }

    pub fn kind(&self) -> TransactionKind {
        self.header.kind
    }

    pub fn trx(&self) -> &T {
        &self.trx
    }

    pub fn into_parts(self) -> (ReceiptHeader, T) {
        (self.header, self.trx)
    }
}

impl<T: PackedDigest> TransactionReceipt<T> {
    /// Content digest of this receipt.
    pub fn digest(&self) -> Digest {
        receipt_digest(self.header, &self.trx.packed_digest())
    }
}

/// Hash of `status || kind || payload_digest` in canonical encoding.
pub fn receipt_digest(header: ReceiptHeader, payload_digest: &Digest) -> Digest {
    let mut hasher = Blake3::new();
    hasher.update(&[header.status.as_u8()]);
    hasher.update(&[header.kind.as_u8()]);
    hasher.update(payload_digest);
    *hasher.finalize().as_bytes()
}

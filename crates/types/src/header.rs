//! Reference block header.
//!
//! The record core treats the header as opaque and only relies on
//! [`BlockHeaderLike`]. This header commits to the block's receipts through
//! `transaction_mroot`, the Merkle root of the receipt digests in inclusion
//! order, and is signed by its producer.

use crate::block::{BlockHeaderLike, Extension, SignedBlock};
use crate::error::ConfirmationError;
use crate::primitives::{AccountName, BlockId, Digest, Signature, SIGNATURE_BYTES};
use crate::schedule::ProducerSchedule;
use crate::signing::{MessageSigner, SignatureVerifier};
use crate::transaction::PackedDigest;
use blake3::Hasher as Blake3;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Unsigned header fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Production time in microseconds since the Unix epoch.
    pub timestamp_us: u64,
    /// Scheduled producer of this block.
    pub producer: AccountName,
    /// Number of prior blocks the producer confirms with this one.
    pub confirmed: u16,
    /// Identifier of the parent block.
    pub previous: BlockId,
    /// Merkle root over the block's receipt digests.
    pub transaction_mroot: Digest,
    /// Version of the producer schedule that authorised `producer`.
    pub schedule_version: u32,
    pub header_extensions: Vec<Extension>,
}

impl BlockHeader {
    pub fn new(previous: BlockId, timestamp_us: u64, producer: AccountName) -> Self {
        Self {
            timestamp_us,
            producer,
            confirmed: 0,
            previous,
            transaction_mroot: [0u8; 32],
            schedule_version: 0,
            header_extensions: Vec::new(),
        }
    }

    /// Height encoded in the first four bytes of a block id.
    pub fn num_from_id(id: &BlockId) -> u32 {
        u32::from_be_bytes([id[0], id[1], id[2], id[3]])
    }

    pub fn block_num(&self) -> u32 {
        Self::num_from_id(&self.previous).wrapping_add(1)
    }

    /// Hash of the canonical encoding of every header field.
    pub fn digest(&self) -> Digest {
        let mut hasher = Blake3::new();
        hasher.update(&self.timestamp_us.to_le_bytes());
        let producer = self.producer.as_str().as_bytes();
        hasher.update(&(producer.len() as u64).to_le_bytes());
        hasher.update(producer);
        hasher.update(&self.confirmed.to_le_bytes());
        hasher.update(&self.previous);
        hasher.update(&self.transaction_mroot);
        hasher.update(&self.schedule_version.to_le_bytes());
        hasher.update(&(self.header_extensions.len() as u64).to_le_bytes());
        for extension in &self.header_extensions {
            hasher.update(&extension.tag.to_le_bytes());
            hasher.update(&(extension.data.len() as u64).to_le_bytes());
            hasher.update(&extension.data);
        }
        *hasher.finalize().as_bytes()
    }

    /// Header digest with the block number written over its first four bytes.
    pub fn id(&self) -> BlockId {
        let mut id = self.digest();
        id[..4].copy_from_slice(&self.block_num().to_be_bytes());
        id
    }
}

impl BlockHeaderLike for BlockHeader {
    fn id(&self) -> BlockId {
        BlockHeader::id(self)
    }

    fn digest(&self) -> Digest {
        BlockHeader::digest(self)
    }
}

/// Header plus the producer's signature over its digest.
///
/// The signature is not part of the id or digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBlockHeader {
    pub header: BlockHeader,
    pub producer_signature: Signature,
}

impl SignedBlockHeader {
    /// Header awaiting its signature.
    pub fn unsigned(header: BlockHeader) -> Self {
        Self {
            header,
            producer_signature: Signature([0u8; SIGNATURE_BYTES]),
        }
    }

    pub fn sign<S: MessageSigner>(&mut self, signer: &S) {
        self.producer_signature = signer.sign(&self.header.digest());
    }

    pub fn block_num(&self) -> u32 {
        self.header.block_num()
    }

    /// Check the producer signature against the scheduled key.
    pub fn verify_signature<V: SignatureVerifier>(
        &self,
        schedule: &ProducerSchedule,
        verifier: &V,
    ) -> Result<(), ConfirmationError> {
        let producer = &self.header.producer;
        let Some(key) = schedule.key_for(producer) else {
            warn!(producer = %producer, "block from unscheduled producer");
            return Err(ConfirmationError::UnknownProducer(producer.clone()));
        };

        if !verifier.verify(key, &self.header.digest(), &self.producer_signature) {
            warn!(
                producer = %producer,
                block_num = self.block_num(),
                "invalid producer signature on block header"
            );
            return Err(ConfirmationError::InvalidSignature {
                producer: producer.clone(),
                block_id: hex::encode(self.header.id()),
            });
        }
        Ok(())
    }
}

impl BlockHeaderLike for SignedBlockHeader {
    fn id(&self) -> BlockId {
        self.header.id()
    }

    fn digest(&self) -> Digest {
        self.header.digest()
    }
}

impl<T: PackedDigest> SignedBlock<SignedBlockHeader, T> {
    /// Write the receipts' Merkle root into the header.
    ///
    /// Invalidates any existing producer signature.
    pub fn commit_transaction_mroot(&mut self) {
        let root = self.transaction_mroot();
        self.header_mut().header.transaction_mroot = root;
    }

    /// Whether the header's `transaction_mroot` matches the receipts.
    pub fn verify_transaction_mroot(&self) -> bool {
        self.header().header.transaction_mroot == self.transaction_mroot()
    }
}

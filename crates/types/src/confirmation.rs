//! Producer confirmations.
//!
//! A confirmation is a producer's detached signature over a block's identity
//! and digest. It lets a validator check that a producer vouched for exactly
//! this block content without the block itself being retransmitted.

use crate::error::ConfirmationError;
use crate::primitives::{AccountName, BlockId, Digest, Signature};
use crate::schedule::ProducerSchedule;
use crate::signing::{MessageSigner, SignatureVerifier};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Length of the message a confirmation signs.
pub const CONFIRMATION_MESSAGE_BYTES: usize = 64;

/// Encodes as `(block_id, block_digest, producer, sig)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerConfirmation {
    block_id: BlockId,
    block_digest: Digest,
    producer: AccountName,
    sig: Signature,
}

impl ProducerConfirmation {
    pub fn new(
        block_id: BlockId,
        block_digest: Digest,
        producer: AccountName,
        sig: Signature,
    ) -> Self {
        Self {
            block_id,
            block_digest,
            producer,
            sig,
        }
    }

    /// Sign `(block_id, block_digest)` on behalf of `producer`.
    pub fn sign<S: MessageSigner>(
        block_id: BlockId,
        block_digest: Digest,
        producer: AccountName,
        signer: &S,
    ) -> Self {
        let sig = signer.sign(&Self::signing_message(&block_id, &block_digest));
        Self::new(block_id, block_digest, producer, sig)
    }

    /// Canonical encoding of the signed pair: `block_id || block_digest`.
    pub fn signing_message(
        block_id: &BlockId,
        block_digest: &Digest,
    ) -> [u8; CONFIRMATION_MESSAGE_BYTES] {
        let mut message = [0u8; CONFIRMATION_MESSAGE_BYTES];
        message[..32].copy_from_slice(block_id);
        message[32..].copy_from_slice(block_digest);
        message
    }

    pub fn block_id(&self) -> &BlockId {
        &self.block_id
    }

    pub fn block_digest(&self) -> &Digest {
        &self.block_digest
    }

    pub fn producer(&self) -> &AccountName {
        &self.producer
    }

    pub fn signature(&self) -> &Signature {
        &self.sig
    }

    /// Check that the scheduled key of `producer` signed exactly this
    /// `(block_id, block_digest)` pair.
    pub fn verify<V: SignatureVerifier>(
        &self,
        schedule: &ProducerSchedule,
        verifier: &V,
    ) -> Result<(), ConfirmationError> {
        let Some(key) = schedule.key_for(&self.producer) else {
            warn!(
                producer = %self.producer,
                schedule_version = schedule.version,
                "confirmation from unscheduled producer"
            );
            return Err(ConfirmationError::UnknownProducer(self.producer.clone()));
        };

        let message = Self::signing_message(&self.block_id, &self.block_digest);
        if !verifier.verify(key, &message, &self.sig) {
            warn!(
                producer = %self.producer,
                block_id = %hex::encode(self.block_id),
                "confirmation signature mismatch"
            );
            return Err(ConfirmationError::InvalidSignature {
                producer: self.producer.clone(),
                block_id: hex::encode(self.block_id),
            });
        }

        debug!(
            producer = %self.producer,
            block_id = %hex::encode(self.block_id),
            "confirmation verified"
        );
        Ok(())
    }
}

//! Block production and validation helpers backed by Ed25519.
//!
//! Producers commit the receipts into the header, sign the header digest and
//! later issue confirmations over `(block_id, block_digest)`. Validators
//! check the same three things against the active producer schedule.

use crate::{Ed25519Verifier, KeyPair};
use ledger_types::{
    AccountName, BlockHeaderLike, ConfirmationError, PackedDigest, ProducerConfirmation,
    ProducerSchedule, SignedBlock, SignedBlockHeader,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Reasons a received block fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockVerificationError {
    #[error("transaction_mroot does not match the block's receipts")]
    TransactionRootMismatch,

    #[error(transparent)]
    Producer(#[from] ConfirmationError),
}

/// Commit the receipts into the header and sign it with `key`.
pub fn sign_block<T: PackedDigest>(block: &mut SignedBlock<SignedBlockHeader, T>, key: &KeyPair) {
    block.commit_transaction_mroot();
    block.header_mut().sign(key);
    debug!(
        block_num = block.header().block_num(),
        producer = %block.header().header.producer,
        receipts = block.len(),
        "signed block"
    );
}

/// Check the receipt commitment and the producer signature of `block`.
pub fn verify_block<T: PackedDigest>(
    block: &SignedBlock<SignedBlockHeader, T>,
    schedule: &ProducerSchedule,
) -> Result<(), BlockVerificationError> {
    if !block.verify_transaction_mroot() {
        warn!(
            block_num = block.header().block_num(),
            "receipts do not match transaction_mroot"
        );
        return Err(BlockVerificationError::TransactionRootMismatch);
    }

    block
        .header()
        .verify_signature(schedule, &Ed25519Verifier)?;
    Ok(())
}

/// Issue a confirmation of `header` as `producer`.
pub fn confirm_block<H: BlockHeaderLike>(
    header: &H,
    producer: AccountName,
    key: &KeyPair,
) -> ProducerConfirmation {
    ProducerConfirmation::sign(header.id(), header.digest(), producer, key)
}

/// Verify a confirmation with Ed25519 against `schedule`.
pub fn verify_confirmation(
    confirmation: &ProducerConfirmation,
    schedule: &ProducerSchedule,
) -> Result<(), ConfirmationError> {
    confirmation.verify(schedule, &Ed25519Verifier)
}

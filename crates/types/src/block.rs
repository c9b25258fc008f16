use crate::config::ExtensionPolicy;
use crate::error::ExtensionError;
use crate::header::SignedBlockHeader;
use crate::merkle::merkle_root;
use crate::primitives::{BlockId, Digest};
use crate::receipt::TransactionReceipt;
use crate::transaction::{PackedDigest, PackedTransaction};
use serde::{Deserialize, Serialize};
use serde_bytes;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Identity and digest derivation supplied by the block header.
pub trait BlockHeaderLike {
    /// Canonical identifier of the block.
    fn id(&self) -> BlockId;
    /// Digest producers sign and confirm.
    fn digest(&self) -> Digest;
}

impl<H: BlockHeaderLike + ?Sized> BlockHeaderLike for Arc<H> {
    fn id(&self) -> BlockId {
        (**self).id()
    }

    fn digest(&self) -> Digest {
        (**self).digest()
    }
}

/// Forward-compatible block data: a type tag and opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extension {
    pub tag: u16,
    #[serde(with = "serde_bytes")]
    pub data: Vec<u8>,
}

impl Extension {
    pub fn new(tag: u16, data: Vec<u8>) -> Self {
        Self { tag, data }
    }
}

/// A finalized block shared between subsystems.
pub type SharedBlock<H = SignedBlockHeader, T = PackedTransaction> = Arc<SignedBlock<H, T>>;

/// A block: header, ordered transaction receipts and extensions.
///
/// Encodes as `(header, transactions, block_extensions)`. Receipts keep the
/// order in which they were appended; nothing here deduplicates or sorts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBlock<H = SignedBlockHeader, T = PackedTransaction> {
    header: H,
    transactions: Vec<TransactionReceipt<T>>,
    block_extensions: Vec<Extension>,
}

impl<H, T> SignedBlock<H, T> {
    /// Empty block to be filled by the producing thread.
    pub fn new(header: H) -> Self {
        Self {
            header,
            transactions: Vec::new(),
            block_extensions: Vec::new(),
        }
    }

    pub fn from_parts(
        header: H,
        transactions: Vec<TransactionReceipt<T>>,
        block_extensions: Vec<Extension>,
    ) -> Self {
        Self {
            header,
            transactions,
            block_extensions,
        }
    }

    pub fn header(&self) -> &H {
        &self.header
    }

    /// Mutable header access while the block is still being produced.
    pub fn header_mut(&mut self) -> &mut H {
        &mut self.header
    }

    pub fn push_receipt(&mut self, receipt: TransactionReceipt<T>) {
        self.transactions.push(receipt);
    }

    pub fn push_extension(&mut self, extension: Extension) {
        self.block_extensions.push(extension);
    }

    pub fn receipts(&self) -> &[TransactionReceipt<T>] {
        &self.transactions
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.block_extensions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn into_parts(self) -> (H, Vec<TransactionReceipt<T>>, Vec<Extension>) {
        (self.header, self.transactions, self.block_extensions)
    }

    /// Check extensions against `policy`.
    ///
    /// A permissive policy accepts anything. A strict one rejects tags it
    /// does not know and tags that appear twice.
    pub fn check_extensions(&self, policy: &ExtensionPolicy) -> Result<(), ExtensionError> {
        if !policy.strict {
            return Ok(());
        }

        let mut seen = BTreeSet::new();
        for extension in &self.block_extensions {
            if !policy.is_known(extension.tag) {
                warn!(tag = extension.tag, "unknown block extension under strict policy");
                return Err(ExtensionError::UnknownExtension(extension.tag));
            }
            if !seen.insert(extension.tag) {
                warn!(tag = extension.tag, "duplicate block extension");
                return Err(ExtensionError::DuplicateExtension(extension.tag));
            }
        }
        Ok(())
    }
}

impl<H, T: PackedDigest> SignedBlock<H, T> {
    /// Receipt digests in inclusion order.
    pub fn receipt_digests(&self) -> Vec<Digest> {
        self.transactions.iter().map(|receipt| receipt.digest()).collect()
    }

    /// Merkle root over the receipt digests.
    pub fn transaction_mroot(&self) -> Digest {
        merkle_root(&self.receipt_digests())
    }
}

impl<H: BlockHeaderLike, T> SignedBlock<H, T> {
    pub fn id(&self) -> BlockId {
        self.header.id()
    }

    pub fn digest(&self) -> Digest {
        self.header.digest()
    }

    /// Freeze the block so it can be handed to other subsystems.
    pub fn finalize(self) -> SharedBlock<H, T> {
        debug!(
            block_id = %hex::encode(self.header.id()),
            receipts = self.transactions.len(),
            extensions = self.block_extensions.len(),
            "block finalized"
        );
        Arc::new(self)
    }
}

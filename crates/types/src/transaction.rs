use crate::primitives::{Digest, Signature, SIGNATURE_BYTES};
use blake3::Hasher as Blake3;
use serde::{Deserialize, Serialize};
use serde_bytes;

/// A transaction payload that can be referenced from a receipt by digest.
///
/// Receipts hash the payload's digest rather than its bytes, so the payload
/// encoding may change as long as this digest stays stable.
pub trait PackedDigest {
    fn packed_digest(&self) -> Digest;
}

impl<T: PackedDigest + ?Sized> PackedDigest for &T {
    fn packed_digest(&self) -> Digest {
        (**self).packed_digest()
    }
}

/// A signed transaction as it travels on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedTransaction {
    /// Signatures authorizing the transaction
    pub signatures: Vec<Signature>,
    /// Opaque encoded transaction body
    #[serde(with = "serde_bytes")]
    pub packed_trx: Vec<u8>,
}

impl PackedTransaction {
    pub fn new(signatures: Vec<Signature>, packed_trx: Vec<u8>) -> Self {
        Self {
            signatures,
            packed_trx,
        }
    }

    /// Unsigned transaction from a packed body.
    pub fn unsigned(packed_trx: Vec<u8>) -> Self {
        Self::new(Vec::new(), packed_trx)
    }

    /// Identifier of the transaction body, independent of its signatures.
    pub fn id(&self) -> Digest {
        *blake3::hash(&self.packed_trx).as_bytes()
    }

    /// Digest of the prunable part (signatures), in canonical encoding.
    pub fn prunable_digest(&self) -> Digest {
        let mut hasher = Blake3::new();
        hasher.update(&(self.signatures.len() as u64).to_le_bytes());
        for signature in &self.signatures {
            hasher.update(&(SIGNATURE_BYTES as u64).to_le_bytes());
            hasher.update(signature.as_bytes());
        }
        *hasher.finalize().as_bytes()
    }
}

impl PackedDigest for PackedTransaction {
    fn packed_digest(&self) -> Digest {
        let mut hasher = Blake3::new();
        hasher.update(&self.prunable_digest());
        hasher.update(&self.id());
        *hasher.finalize().as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn id_ignores_signatures() {
        let unsigned = PackedTransaction::unsigned(b"transfer".to_vec());
        let signed = PackedTransaction::new(vec![Signature([1; 64])], b"transfer".to_vec());
        assert_eq!(unsigned.id(), signed.id());
        assert_ne!(unsigned.packed_digest(), signed.packed_digest());
    }

    #[test]
    fn packed_digest_tracks_body() {
        let a = PackedTransaction::unsigned(b"transfer:1".to_vec());
        let b = PackedTransaction::unsigned(b"transfer:2".to_vec());
        assert_ne!(a.packed_digest(), b.packed_digest());
        assert_eq!(a.packed_digest(), a.clone().packed_digest());
    }

    #[test]
    fn prunable_digest_matches_canonical_encoding() {
        let trx = PackedTransaction::new(
            vec![Signature([3; 64]), Signature([4; 64])],
            b"body".to_vec(),
        );
        let encoded = codec::encode(&trx.signatures).unwrap();
        assert_eq!(trx.prunable_digest(), *blake3::hash(&encoded).as_bytes());
    }
}

//! Signing collaborator interfaces.
//!
//! Records never hold key material. Producing and checking signatures is
//! delegated to implementations of these traits (Ed25519 lives in
//! `ledger-crypto`).

use crate::primitives::{PublicKey, Signature};

/// Produces signatures with a single private key.
pub trait MessageSigner {
    /// Public half of the signing key.
    fn public_key(&self) -> PublicKey;

    fn sign(&self, message: &[u8]) -> Signature;
}

/// Checks signatures against a public key.
pub trait SignatureVerifier {
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool;
}

impl<S: MessageSigner + ?Sized> MessageSigner for &S {
    fn public_key(&self) -> PublicKey {
        (**self).public_key()
    }

    fn sign(&self, message: &[u8]) -> Signature {
        (**self).sign(message)
    }
}

impl<V: SignatureVerifier + ?Sized> SignatureVerifier for &V {
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
        (**self).verify(public_key, message, signature)
    }
}

use anyhow::{anyhow, Result};
use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use ledger_types::{MessageSigner, PublicKey, Signature, SignatureVerifier};
use rand_core::{OsRng, RngCore};

pub mod producer;

pub use producer::{
    confirm_block, sign_block, verify_block, verify_confirmation, BlockVerificationError,
};

/// Ed25519 key pair used to sign block headers and confirmations
#[derive(Debug, Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl KeyPair {
    /// Generate a new key pair
    pub fn generate() -> Self {
        let mut secret_key = [0u8; 32];
        OsRng.fill_bytes(&mut secret_key);
        Self::from_seed(&secret_key)
    }

    /// Deterministic key pair from a 32-byte seed
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        let verifying_key = signing_key.verifying_key();

        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Get the public key as bytes
    pub fn public_key(&self) -> PublicKey {
        self.verifying_key.to_bytes()
    }

    /// Sign a message
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature::from_bytes(self.signing_key.sign(message).to_bytes())
    }

    /// Verify a signature made by this key pair
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<()> {
        let sig = ed25519_dalek::Signature::from_bytes(signature.as_bytes());
        self.verifying_key
            .verify(message, &sig)
            .map_err(|e| anyhow!("signature rejected: {e}"))
    }
}

impl MessageSigner for KeyPair {
    fn public_key(&self) -> PublicKey {
        KeyPair::public_key(self)
    }

    fn sign(&self, message: &[u8]) -> Signature {
        KeyPair::sign(self, message)
    }
}

/// Stateless Ed25519 signature verifier
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(public_key) else {
            return false;
        };
        let sig = ed25519_dalek::Signature::from_bytes(signature.as_bytes());
        verifying_key.verify(message, &sig).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypair_generation() {
        let keypair = KeyPair::generate();
        assert_ne!(keypair.public_key(), [0u8; 32]);
    }

    #[test]
    fn test_signing_and_verification() {
        let keypair = KeyPair::generate();
        let message = b"block-digest";

        let signature = keypair.sign(message);
        assert!(keypair.verify(message, &signature).is_ok());
        assert!(Ed25519Verifier.verify(&keypair.public_key(), message, &signature));
    }

    #[test]
    fn test_verifier_rejects_other_key() {
        let signer = KeyPair::from_seed(&[1u8; 32]);
        let other = KeyPair::from_seed(&[2u8; 32]);
        let signature = signer.sign(b"payload");
        assert!(!Ed25519Verifier.verify(&other.public_key(), b"payload", &signature));
        assert!(other.verify(b"payload", &signature).is_err());
    }

    #[test]
    fn test_verifier_rejects_arbitrary_key_bytes() {
        let signer = KeyPair::from_seed(&[3u8; 32]);
        let signature = signer.sign(b"payload");
        let mut bogus = [0u8; 32];
        bogus[0] = 2;
        assert!(!Ed25519Verifier.verify(&bogus, b"payload", &signature));
    }
}

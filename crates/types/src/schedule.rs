//! Producer schedule used to resolve producer identities to signing keys.

use crate::primitives::{AccountName, PublicKey};
use serde::{Deserialize, Serialize};

/// A producer and the key it signs blocks with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerKey {
    pub producer_name: AccountName,
    pub block_signing_key: PublicKey,
}

/// Versioned, ordered list of active producers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerSchedule {
    pub version: u32,
    pub producers: Vec<ProducerKey>,
}

impl ProducerSchedule {
    pub fn new(version: u32, producers: Vec<ProducerKey>) -> Self {
        Self { version, producers }
    }

    /// Signing key of `producer`, if it is scheduled.
    pub fn key_for(&self, producer: &AccountName) -> Option<&PublicKey> {
        self.producers
            .iter()
            .find(|entry| &entry.producer_name == producer)
            .map(|entry| &entry.block_signing_key)
    }

    pub fn contains(&self, producer: &AccountName) -> bool {
        self.key_for(producer).is_some()
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }
}

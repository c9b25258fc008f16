use crate::error::AccountNameError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fixed-size content digest (BLAKE3-256).
pub type Digest = [u8; 32];
/// Canonical identifier of a block, derived by the header collaborator.
pub type BlockId = [u8; 32];
/// Raw Ed25519 verifying key bytes.
pub type PublicKey = [u8; 32];

/// Number of raw bytes in a [`Signature`].
pub const SIGNATURE_BYTES: usize = 64;
/// Longest permitted producer account name.
pub const MAX_ACCOUNT_NAME_LEN: usize = 21;

/// A detached 64-byte signature produced by the signing collaborator.
///
/// Encoded as a length-prefixed byte string so that decoders can reject
/// signatures of the wrong width instead of misreading the next field.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature(pub [u8; SIGNATURE_BYTES]);

impl Signature {
    pub fn from_bytes(bytes: [u8; SIGNATURE_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_BYTES] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_BYTES] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(self.0))
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_bytes::Bytes::new(&self.0).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let buf = serde_bytes::ByteBuf::deserialize(deserializer)?;
        let len = buf.len();
        let bytes: [u8; SIGNATURE_BYTES] = buf
            .into_vec()
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"64 signature bytes"))?;
        Ok(Self(bytes))
    }
}

/// Name of the account that produced or confirmed a block.
///
/// Valid names are 1 to 21 characters drawn from `a-z`, `0-9`, `.` and `-`,
/// and neither start nor end with `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountName(String);

impl AccountName {
    pub fn new(name: impl Into<String>) -> Result<Self, AccountNameError> {
        let name = name.into();
        validate_account_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_account_name(name: &str) -> Result<(), AccountNameError> {
    if name.is_empty() {
        return Err(AccountNameError::Empty);
    }

    let len = name.chars().count();
    if len > MAX_ACCOUNT_NAME_LEN {
        return Err(AccountNameError::TooLong {
            max: MAX_ACCOUNT_NAME_LEN,
            actual: len,
        });
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '.' | '-'))
    {
        return Err(AccountNameError::InvalidCharacter(bad));
    }

    if name.starts_with('.') || name.ends_with('.') {
        return Err(AccountNameError::EdgeDot);
    }

    Ok(())
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountName {
    type Err = AccountNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountName {
    type Error = AccountNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountName> for String {
    fn from(value: AccountName) -> Self {
        value.0
    }
}

//! Record layer configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

/// Default upper bound on the size of a single decoded record (8 MiB).
pub const DEFAULT_MAX_RECORD_BYTES: u64 = 8 * 1024 * 1024;

/// Top-level configuration for the record layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    /// Wire codec limits
    pub codec: CodecConfig,
    /// Block extension acceptance policy
    pub extensions: ExtensionPolicy,
}

/// Wire codec limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Largest record, in bytes, that decoding will accept
    pub max_record_bytes: u64,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_record_bytes: DEFAULT_MAX_RECORD_BYTES,
        }
    }
}

/// Which block extensions a consumer accepts.
///
/// The permissive default preserves and ignores unknown tags. Strict mode is
/// reserved for protocol versions that pin an exact extension set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionPolicy {
    /// Reject tags outside `known_tags` and repeated tags
    pub strict: bool,
    /// Extension tags understood by this node
    pub known_tags: BTreeSet<u16>,
}

impl ExtensionPolicy {
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn strict(known_tags: impl IntoIterator<Item = u16>) -> Self {
        Self {
            strict: true,
            known_tags: known_tags.into_iter().collect(),
        }
    }

    pub fn is_known(&self, tag: u16) -> bool {
        self.known_tags.contains(&tag)
    }
}

impl RecordConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        info!(
            path = %path.display(),
            max_record_bytes = config.codec.max_record_bytes,
            strict_extensions = config.extensions.strict,
            "loaded record config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.codec.max_record_bytes == 0 {
            return Err(ConfigError::Invalid(
                "codec.max_record_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = RecordConfig::from_toml_str("").unwrap();
        assert_eq!(config, RecordConfig::default());
        assert_eq!(config.codec.max_record_bytes, DEFAULT_MAX_RECORD_BYTES);
        assert!(!config.extensions.strict);
    }

    #[test]
    fn parses_strict_extension_policy() {
        let config = RecordConfig::from_toml_str(
            r#"
            [codec]
            max_record_bytes = 4096

            [extensions]
            strict = true
            known_tags = [1, 7]
            "#,
        )
        .unwrap();
        assert_eq!(config.codec.max_record_bytes, 4096);
        assert_eq!(config.extensions, ExtensionPolicy::strict([7, 1]));
        assert!(config.extensions.is_known(7));
        assert!(!config.extensions.is_known(2));
    }

    #[test]
    fn rejects_zero_limit() {
        let err = RecordConfig::from_toml_str("[codec]\nmax_record_bytes = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[extensions]\nstrict = true\nknown_tags = [3]").unwrap();
        let config = RecordConfig::load(file.path()).unwrap();
        assert!(config.extensions.strict);
        assert!(config.extensions.is_known(3));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RecordConfig::load("/nonexistent/ledger-records.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

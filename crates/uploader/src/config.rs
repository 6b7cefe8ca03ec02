//! Upload configuration.

use serde::{Deserialize, Serialize};

use crate::error::UploadError;
use crate::part_size::{self, DEFAULT_PART_SIZE};

/// Configuration for one archive upload.
///
/// The part size is validated when the configuration is built with
/// [`UploadConfig::new`] and re-checked when an
/// [`ArchiveUploader`](crate::ArchiveUploader) is constructed, so an
/// invalid size never reaches the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfig {
    pub vault_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub archive_description: String,
    pub part_size: u64,
}

impl UploadConfig {
    /// Creates a validated configuration.
    ///
    /// Fails with [`UploadError::Config`] if `part_size` is not a power
    /// of two in `[1 MiB, 4 GiB]`.
    pub fn new(
        vault_name: impl Into<String>,
        archive_description: impl Into<String>,
        part_size: u64,
    ) -> Result<Self, UploadError> {
        let config = Self {
            vault_name: vault_name.into(),
            archive_description: archive_description.into(),
            part_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration with [`DEFAULT_PART_SIZE`].
    pub fn with_default_part_size(
        vault_name: impl Into<String>,
        archive_description: impl Into<String>,
    ) -> Self {
        Self {
            vault_name: vault_name.into(),
            archive_description: archive_description.into(),
            part_size: DEFAULT_PART_SIZE,
        }
    }

    /// Checks the part size. Deserialized configurations bypass
    /// [`new`](Self::new), so consumers validate again before use.
    pub fn validate(&self) -> Result<(), UploadError> {
        if !part_size::is_valid_part_size(self.part_size) {
            return Err(UploadError::Config(format!(
                "part size {} invalid: must be a power of two between {} and {}",
                self.part_size,
                part_size::MIN_PART_SIZE,
                part_size::MAX_PART_SIZE,
            )));
        }
        Ok(())
    }
}

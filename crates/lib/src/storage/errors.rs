//! Error types for the storage module

use thiserror::Error;

/// Errors that can occur in storage adapters.
///
/// Read-side corruption is not represented here: corrupt blobs are recovered
/// by `load_or_default` substituting a default value. These variants cover
/// the failures that do propagate, which are write/remove failures and keys
/// an adapter cannot represent.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the blob under a key failed at the I/O level.
    #[error("Storage read failed for key '{key}': {source}")]
    ReadFailed {
        /// The logical key being read
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the blob under a key failed.
    #[error("Storage write failed for key '{key}': {source}")]
    WriteFailed {
        /// The logical key being written
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Removing the blob under a key failed.
    #[error("Storage remove failed for key '{key}': {source}")]
    RemoveFailed {
        /// The logical key being removed
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be used by this adapter (e.g. contains a path separator).
    #[error("Invalid storage key: '{key}'")]
    InvalidKey {
        /// The rejected key
        key: String,
    },
}

impl StorageError {
    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            StorageError::ReadFailed { .. }
                | StorageError::WriteFailed { .. }
                | StorageError::RemoveFailed { .. }
        )
    }

    /// Get the logical key this error is about.
    pub fn key(&self) -> &str {
        match self {
            StorageError::ReadFailed { key, .. }
            | StorageError::WriteFailed { key, .. }
            | StorageError::RemoveFailed { key, .. }
            | StorageError::InvalidKey { key } => key,
        }
    }
}

// Conversion to the main Error type
impl From<StorageError> for crate::Error {
    fn from(err: StorageError) -> Self {
        crate::Error::Storage(err)
    }
}

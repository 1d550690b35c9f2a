//! Error types for instance-level operations

use thiserror::Error;

/// Errors that can occur during instance-level operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InstanceError {
    /// An import payload failed validation.
    ///
    /// Raised when the payload is not JSON at all, or when it is missing the
    /// `users` or `enrollments` registry. Nothing is replaced on failure.
    #[error("Invalid import format: {reason}")]
    InvalidImportFormat {
        /// Description of why the payload was rejected
        reason: String,
    },
}

impl InstanceError {
    /// Check if this error indicates a malformed import payload.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, InstanceError::InvalidImportFormat { .. })
    }
}

// Conversion to the main Error type
impl From<InstanceError> for crate::Error {
    fn from(err: InstanceError) -> Self {
        crate::Error::Instance(err)
    }
}

//!
//! LiteLearn: a local-first course catalog and enrollment tracker.
//! This library provides the data and session layer consumed by the CLI
//! (and any other presentation front end).
//!
//! ## Core Concepts
//!
//! * **Storage (`storage::Storage`)**: A pluggable key-value adapter holding four
//!   persisted blobs: the user registry, the session, the enrollment registry, and
//!   the theme preference. Corrupt or missing blobs load as defaults.
//! * **Catalog (`catalog::Catalog`)**: The immutable list of offered courses,
//!   seeded at startup and never mutated at runtime.
//! * **Instance (`instance::Instance`)**: The root object owning the injected
//!   storage, the catalog, and the in-memory registries. All operations are
//!   methods on `Instance`, implemented across the component modules.
//! * **Identity (`identity`)**: Registration, authentication, and the single
//!   active session.
//! * **Enrollment (`enrollment`)**: Per-user, per-course lesson completion
//!   tracking and percent-complete computation.
//! * **Queries (`query`)**: Read-only derived views (course filtering, the
//!   enrollment dashboard, account summaries).
//!
//! Every mutation persists write-through: the full value under the affected
//! storage key is overwritten immediately, with no batching.

pub mod catalog;
pub mod clock;
pub mod enrollment;
pub mod identity;
pub mod instance;
pub mod query;
pub mod storage;

pub use catalog::{Catalog, Course, Level};
pub use clock::{Clock, SystemClock};
pub use enrollment::Enrollment;
pub use identity::{Session, User};
pub use instance::{DataExport, Instance, Theme};
pub use query::AccountSummary;

#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;

/// Result type used throughout the LiteLearn library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the LiteLearn library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured storage errors from the storage module
    #[error(transparent)]
    Storage(storage::StorageError),

    /// Structured identity and session errors from the identity module
    #[error(transparent)]
    Identity(identity::IdentityError),

    /// Structured enrollment errors from the enrollment module
    #[error(transparent)]
    Enrollment(enrollment::EnrollmentError),

    /// Structured instance errors from the instance module
    #[error(transparent)]
    Instance(instance::InstanceError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Storage(_) => "storage",
            Error::Identity(_) => "identity",
            Error::Enrollment(_) => "enrollment",
            Error::Instance(_) => "instance",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Enrollment(enrollment_err) => enrollment_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Identity(identity_err) => identity_err.is_already_exists(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::Identity(identity_err) => identity_err.is_invalid_credentials(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Enrollment(enrollment_err) => enrollment_err.is_out_of_range(),
            Error::Instance(instance_err) => instance_err.is_invalid_format(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Storage(storage_err) => storage_err.is_io_error(),
            _ => false,
        }
    }
}

//! Storage adapters for LiteLearn persisted state
//!
//! This module provides the core [`Storage`] trait and its implementations.
//!
//! The trait wraps a host key-value store holding raw string blobs. The data
//! layer persists exactly four logical keys (see [`keys`]): the user registry,
//! the session, the enrollment registry, and the theme preference. Each `set`
//! is an independent, immediate overwrite of the full value under that key;
//! there is no transactionality and no incremental patching.
//!
//! Typed access goes through [`load_or_default`] and [`store`], which handle
//! JSON serialization. A corrupt or missing blob never surfaces to the caller:
//! [`load_or_default`] substitutes the supplied default and logs a warning.

use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

use crate::Result;

mod file;
mod in_memory;

pub mod errors;

pub use errors::StorageError;
pub use file::FileStore;
pub use in_memory::InMemory;

/// The four logical storage keys.
///
/// The names match the browser front end's localStorage keys so that
/// exported data remains recognizable across front ends.
pub mod keys {
    /// User registry: mapping email -> User.
    pub const USERS: &str = "ll_users";
    /// Active session: `{ "email": ... }` or null.
    pub const SESSION: &str = "ll_session";
    /// Enrollment registry: mapping email -> course id -> enrollment record.
    pub const ENROLLMENTS: &str = "ll_enrollments";
    /// Theme preference: `"light"` or `"dark"`.
    pub const THEME: &str = "ll_theme";

    /// All keys, in wipe order.
    pub const ALL: [&str; 4] = [USERS, SESSION, ENROLLMENTS, THEME];
}

/// Storage trait abstracting the underlying key-value store.
///
/// Implementations handle the specifics of how blobs are persisted (in memory,
/// on disk, in a browser's localStorage behind a WASM shim). The store is
/// private to a single process instance: there is exactly one writer and no
/// locking discipline beyond each implementation's own interior mutability.
pub trait Storage: Send + Sync + Debug {
    /// Retrieves the raw blob stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous blob entirely.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the blob stored under `key`. Succeeds if the key is absent.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Load and deserialize the value under `key`, falling back to `default`.
///
/// Read failures are recovered locally: a missing key, an unreadable blob, or
/// a blob that does not deserialize into `T` all yield the supplied default.
/// Corruption is logged but never surfaced, so startup always succeeds.
pub fn load_or_default<T: DeserializeOwned>(storage: &dyn Storage, key: &str, default: T) -> T {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(e) => {
            tracing::warn!("storage read for '{key}' failed, using default: {e}");
            return default;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("corrupt blob under '{key}', using default: {e}");
            default
        }
    }
}

/// Serialize `value` as JSON and write it through under `key`.
pub fn store<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}

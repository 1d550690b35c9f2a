//!
//! Provides the root [`Instance`] object.
//!
//! `Instance` owns the injected storage adapter, the clock, the immutable
//! catalog, and the three in-memory registries (users, session,
//! enrollments). All operations in the identity, enrollment, and query
//! modules are methods on `Instance`, implemented in their own modules.
//!
//! Startup loads persisted state through the corrupt-tolerant storage
//! helpers, so a damaged blob degrades to an empty registry instead of a
//! failed open. Every mutation persists write-through immediately.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::enrollment::Enrollment;
use crate::identity::{Session, User};
use crate::storage::{self, Storage};

pub mod errors;
mod portability;

pub use errors::InstanceError;
pub use portability::DataExport;

/// Per-user enrollment map: course id -> enrollment record.
pub type CourseEnrollments = BTreeMap<String, Enrollment>;

/// Internal state for Instance
///
/// This structure holds the actual data for Instance. Instance itself is a
/// cheap-to-clone handle wrapping `Arc<InstanceInternal>`.
pub(crate) struct InstanceInternal {
    /// The injected storage adapter
    pub(crate) storage: Arc<dyn Storage>,
    /// Time provider for enrollment timestamps
    pub(crate) clock: Arc<dyn Clock>,
    /// The immutable course catalog
    pub(crate) catalog: Catalog,
    /// User registry, keyed by lowercased email
    pub(crate) users: RwLock<BTreeMap<String, User>>,
    /// The single active session, if any
    pub(crate) session: RwLock<Option<Session>>,
    /// Enrollment registry: email -> course id -> record
    pub(crate) enrollments: RwLock<BTreeMap<String, CourseEnrollments>>,
}

impl fmt::Debug for InstanceInternal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceInternal")
            .field("storage", &self.storage)
            .field("clock", &self.clock)
            .field("catalog", &format!("<{} courses>", self.catalog.len()))
            .field(
                "users",
                &format!("<{} users>", self.users.read().unwrap().len()),
            )
            .field("session", &self.session.read().unwrap())
            .field(
                "enrollments",
                &format!("<{} users>", self.enrollments.read().unwrap().len()),
            )
            .finish()
    }
}

/// Root object of the LiteLearn data layer.
///
/// Instance manages:
/// - The injected storage adapter and the write-through persistence of the
///   four storage keys
/// - The user registry and the single active session (identity module)
/// - Per-user enrollment records and progress (enrollment module)
/// - Read-only derived views (query module)
/// - Bulk export/import and the full data wipe
///
/// Instance is a cheap-to-clone handle around `Arc<InstanceInternal>`.
///
/// ## Example
///
/// ```
/// # use std::sync::Arc;
/// # use litelearn::{storage::InMemory, Catalog, Instance};
/// # fn main() -> litelearn::Result<()> {
/// let instance = Instance::open(Arc::new(InMemory::new()), Catalog::demo());
///
/// instance.register("Ada", "ada@example.com", "hunter2")?;
/// instance.enroll("ada@example.com", "html101")?;
/// instance.set_lesson_completion("ada@example.com", "html101", 0, true)?;
/// assert_eq!(instance.percent_complete("ada@example.com", "html101"), 17);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Instance {
    inner: Arc<InstanceInternal>,
}

impl Instance {
    /// Open an instance over the given storage adapter and catalog.
    ///
    /// Loads the three persisted registries; a missing or corrupt blob loads
    /// as its empty default, so opening always succeeds. The system clock
    /// provides enrollment timestamps.
    pub fn open(storage: Arc<dyn Storage>, catalog: Catalog) -> Self {
        Self::open_impl(storage, catalog, Arc::new(SystemClock))
    }

    /// Open an instance with a custom clock.
    ///
    /// Same as [`Instance::open`] but allows injecting a controllable clock
    /// for deterministic enrollment timestamps in tests.
    ///
    /// Only available with the `testing` feature or in test builds.
    #[cfg(any(test, feature = "testing"))]
    pub fn open_with_clock(
        storage: Arc<dyn Storage>,
        catalog: Catalog,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::open_impl(storage, catalog, clock)
    }

    fn open_impl(storage: Arc<dyn Storage>, catalog: Catalog, clock: Arc<dyn Clock>) -> Self {
        let users =
            storage::load_or_default(storage.as_ref(), storage::keys::USERS, BTreeMap::new());
        let session = storage::load_or_default(storage.as_ref(), storage::keys::SESSION, None);
        let enrollments = storage::load_or_default(
            storage.as_ref(),
            storage::keys::ENROLLMENTS,
            BTreeMap::new(),
        );

        Self {
            inner: Arc::new(InstanceInternal {
                storage,
                clock,
                catalog,
                users: RwLock::new(users),
                session: RwLock::new(session),
                enrollments: RwLock::new(enrollments),
            }),
        }
    }

    /// The course catalog this instance was opened with.
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// The underlying storage adapter.
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.inner.storage
    }

    /// The persisted theme preference, if one is set and recognizable.
    pub fn theme(&self) -> Option<Theme> {
        storage::load_or_default(self.inner.storage.as_ref(), storage::keys::THEME, None)
    }

    /// Persist the theme preference.
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        storage::store(self.inner.storage.as_ref(), storage::keys::THEME, &theme)
    }

    pub(crate) fn internal(&self) -> &InstanceInternal {
        &self.inner
    }
}

/// Theme preference of the presentation layer.
///
/// Carried in the data layer only because it completes the storage
/// contract: it is the fourth persisted key and is removed by `wipe()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

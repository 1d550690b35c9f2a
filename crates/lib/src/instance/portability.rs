//! Bulk export, import, and the full data wipe
//!
//! Export produces a single structure holding all three registries; import
//! accepts the same shape, validates it, and replaces everything at once.
//! The JSON shape matches the browser front end's download format, so data
//! files move between front ends unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identity::{Session, User};
use crate::instance::{CourseEnrollments, Instance, InstanceError};
use crate::{Result, storage};

/// The full persisted state, as exported and imported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataExport {
    /// User registry: email -> account
    pub users: BTreeMap<String, User>,
    /// Enrollment registry: email -> course id -> record
    pub enrollments: BTreeMap<String, CourseEnrollments>,
    /// Active session, if any
    pub session: Option<Session>,
}

/// Raw import shape. `users` and `enrollments` are required (checked after
/// parsing so the error can name the missing field); `session` is optional.
#[derive(Deserialize)]
struct ImportPayload {
    users: Option<BTreeMap<String, User>>,
    enrollments: Option<BTreeMap<String, CourseEnrollments>>,
    #[serde(default)]
    session: Option<Session>,
}

impl Instance {
    /// Snapshot all three registries for export.
    pub fn export_data(&self) -> DataExport {
        DataExport {
            users: self.internal().users.read().unwrap().clone(),
            enrollments: self.internal().enrollments.read().unwrap().clone(),
            session: self.internal().session.read().unwrap().clone(),
        }
    }

    /// Export as pretty-printed JSON, the download format shared across
    /// front ends.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export_data())?)
    }

    /// Import a JSON payload, replacing all three registries.
    ///
    /// # Errors
    /// `InstanceError::InvalidImportFormat` when the payload is not JSON or
    /// is missing `users` or `enrollments`. Existing in-memory and persisted
    /// state is left untouched on failure.
    pub fn import_json(&self, payload: &str) -> Result<()> {
        let parsed: ImportPayload = serde_json::from_str(payload).map_err(|e| {
            InstanceError::InvalidImportFormat {
                reason: e.to_string(),
            }
        })?;
        let users = parsed.users.ok_or_else(|| InstanceError::InvalidImportFormat {
            reason: "missing `users`".to_string(),
        })?;
        let enrollments = parsed
            .enrollments
            .ok_or_else(|| InstanceError::InvalidImportFormat {
                reason: "missing `enrollments`".to_string(),
            })?;

        self.import_data(DataExport {
            users,
            enrollments,
            session: parsed.session,
        })
    }

    /// Replace all three registries with the given snapshot and persist
    /// each storage key independently.
    pub fn import_data(&self, data: DataExport) -> Result<()> {
        {
            let mut users = self.internal().users.write().unwrap();
            *users = data.users;
        }
        {
            let mut enrollments = self.internal().enrollments.write().unwrap();
            *enrollments = data.enrollments;
        }
        self.persist_users()?;
        self.persist_enrollments()?;
        self.set_session(data.session)?;

        tracing::info!("imported {} users", self.user_count());
        Ok(())
    }

    /// Remove all four storage keys and reset the in-memory registries.
    pub fn wipe(&self) -> Result<()> {
        for key in storage::keys::ALL {
            self.internal().storage.remove(key)?;
        }
        {
            let mut users = self.internal().users.write().unwrap();
            users.clear();
        }
        {
            let mut session = self.internal().session.write().unwrap();
            *session = None;
        }
        {
            let mut enrollments = self.internal().enrollments.write().unwrap();
            enrollments.clear();
        }

        tracing::info!("all data wiped");
        Ok(())
    }
}

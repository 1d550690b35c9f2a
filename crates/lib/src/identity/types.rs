//! Core data types for identity and session state

use serde::{Deserialize, Serialize};

/// A registered user account.
///
/// Users are keyed by their lowercased email in the registry. The id is an
/// opaque, freshly generated value; nothing dereferences it internally, but
/// it survives export/import so external tooling can rely on it.
///
/// Passwords are stored and compared in plaintext. This is demo-grade local
/// data, not an authentication system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique id (UUID v4)
    pub id: String,

    /// Display name
    pub name: String,

    /// Lowercased email, the registry key
    pub email: String,

    /// Plaintext password (demo-grade)
    pub password: String,
}

/// The single active session: a pointer to a user by email.
///
/// At most one session exists per process. It is not an entity with its own
/// identity; logging in simply overwrites it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Lowercased email of the authenticated user
    pub email: String,
}

//! Identity and session management
//!
//! Manages the user registry (keyed by lowercased email) and the single
//! active session. Registration establishes a session immediately so a new
//! account lands logged in; authentication overwrites any prior session; a
//! failed authentication leaves the existing session untouched.

use uuid::Uuid;

use crate::instance::Instance;
use crate::{Result, storage};

pub mod errors;
pub mod types;

pub use errors::IdentityError;
pub use types::{Session, User};

/// Normalize an email for lookup or storage: trimmed and lowercased.
///
/// Every identity and enrollment operation passes emails through here, so
/// `Alice@Example.COM` and `alice@example.com` are the same account.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl Instance {
    /// Register a new user account and log them in.
    ///
    /// The email is normalized before the uniqueness check. On success the
    /// new `User` (with a freshly generated opaque id) is inserted into the
    /// registry, the registry is persisted, and a session is established for
    /// the new email.
    ///
    /// # Errors
    /// `IdentityError::EmailAlreadyExists` if the registry already holds the
    /// normalized email. The registry and session are left unchanged.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let email = normalize_email(email);
        {
            let users = self.internal().users.read().unwrap();
            if users.contains_key(&email) {
                return Err(IdentityError::EmailAlreadyExists { email }.into());
            }
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.clone(),
            password: password.to_string(),
        };

        {
            let mut users = self.internal().users.write().unwrap();
            users.insert(email.clone(), user.clone());
        }
        self.persist_users()?;

        tracing::debug!("registered user {email}");
        self.set_session(Some(Session { email }))?;
        Ok(user)
    }

    /// Authenticate against the registry and establish a session.
    ///
    /// Password comparison is exact string equality on the stored plaintext.
    /// Logging in overwrites any prior session.
    ///
    /// # Errors
    /// `IdentityError::InvalidCredentials` for an unknown email or a password
    /// mismatch; any existing session is left unchanged.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let email = normalize_email(email);
        let user = {
            let users = self.internal().users.read().unwrap();
            match users.get(&email) {
                Some(user) if user.password == password => user.clone(),
                _ => return Err(IdentityError::InvalidCredentials.into()),
            }
        };

        tracing::debug!("authenticated {email}");
        self.set_session(Some(Session { email }))?;
        Ok(user)
    }

    /// Clear the active session.
    pub fn logout(&self) -> Result<()> {
        tracing::debug!("session cleared");
        self.set_session(None)
    }

    /// The currently authenticated user, if any.
    ///
    /// Dereferences the session email against the registry; returns `None`
    /// when there is no session or the session points at a user that no
    /// longer exists (e.g. after an import replaced the registry).
    pub fn current_user(&self) -> Option<User> {
        let session = self.internal().session.read().unwrap();
        let email = session.as_ref()?.email.clone();
        drop(session);

        let users = self.internal().users.read().unwrap();
        users.get(&email).cloned()
    }

    /// Number of registered accounts.
    pub fn user_count(&self) -> usize {
        self.internal().users.read().unwrap().len()
    }

    /// Replace the session (or clear it with `None`) and persist it.
    pub(crate) fn set_session(&self, session: Option<Session>) -> Result<()> {
        {
            let mut current = self.internal().session.write().unwrap();
            *current = session;
        }
        let session = self.internal().session.read().unwrap();
        storage::store(
            self.internal().storage.as_ref(),
            storage::keys::SESSION,
            &*session,
        )
    }

    /// Persist the full user registry under its storage key.
    pub(crate) fn persist_users(&self) -> Result<()> {
        let users = self.internal().users.read().unwrap();
        storage::store(
            self.internal().storage.as_ref(),
            storage::keys::USERS,
            &*users,
        )
    }
}

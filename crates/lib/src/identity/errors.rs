//! Error types for identity and session management
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IdentityError {
    /// Registration attempted with an email already in the registry.
    #[error("An account with this email already exists: {email}")]
    EmailAlreadyExists {
        /// The (lowercased) email that is already taken
        email: String,
    },

    /// Login failed: unknown email or password mismatch.
    ///
    /// The two cases are deliberately indistinguishable to the caller; front
    /// ends surface a single "Invalid email or password" message.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl IdentityError {
    /// Check if this error indicates the email is already registered.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, IdentityError::EmailAlreadyExists { .. })
    }

    /// Check if this error indicates a failed login.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, IdentityError::InvalidCredentials)
    }
}

// Conversion to the main Error type
impl From<IdentityError> for crate::Error {
    fn from(err: IdentityError) -> Self {
        crate::Error::Identity(err)
    }
}

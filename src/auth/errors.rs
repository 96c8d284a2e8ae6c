//! # Auth Errors
//!
//! Error types for the authentication gate.

use thiserror::Error;

use crate::storage::{StoreError, StoreErrorCode};

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Signup and login errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Signup with a username that already exists
    #[error("Username already exists")]
    UsernameTaken,

    /// Login mismatch (generic - don't leak whether the username exists)
    #[error("Invalid username or password")]
    AuthFailure,

    /// The user store could not be read or written
    #[error("User store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::UsernameTaken => "HOSP_USERNAME_TAKEN",
            AuthError::AuthFailure => "HOSP_AUTH_FAILURE",
            AuthError::Store(e) => e.code().code(),
        }
    }

    /// Returns whether the caller's input caused this error
    pub fn is_client_error(&self) -> bool {
        match self {
            AuthError::UsernameTaken | AuthError::AuthFailure => true,
            AuthError::Store(e) => e.code() == StoreErrorCode::HospInvalidField,
        }
    }
}

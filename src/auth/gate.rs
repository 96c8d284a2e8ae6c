//! # Auth Gate
//!
//! Signup and login against the user store.
//!
//! ## Behavior
//! - Usernames are unique at signup time only; the check is a full scan and
//!   is not atomic with the append that follows it
//! - Credentials are stored and compared in cleartext
//! - Login failure never says which half of the pair was wrong
//! - No lockout, no rate limiting

use subtle::ConstantTimeEq;

use super::errors::{AuthError, AuthResult};
use crate::observability::{log_event_with_fields, Event};
use crate::record::User;
use crate::storage::RecordStore;

/// Constant-time comparison of two byte slices
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Authentication gate over a user store.
#[derive(Debug, Clone)]
pub struct AuthGate<'a> {
    users: &'a RecordStore<User>,
}

impl<'a> AuthGate<'a> {
    pub fn new(users: &'a RecordStore<User>) -> Self {
        Self { users }
    }

    /// Check if a username is already registered
    pub fn username_exists(&self, username: &str) -> AuthResult<bool> {
        for record in self.users.scan()? {
            if record?.username == username {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// `UsernameTaken` if the username exists; nothing is written.
    /// `Store` if the user file cannot be read or the pair cannot be
    /// encoded as one line.
    pub fn signup(&self, username: &str, password: &str) -> AuthResult<()> {
        if self.username_exists(username)? {
            log_event_with_fields(Event::SignupRejected, &[("username", username)]);
            return Err(AuthError::UsernameTaken);
        }

        self.users.append(&User::new(username, password))?;

        log_event_with_fields(Event::SignupComplete, &[("username", username)]);
        Ok(())
    }

    /// Returns whether some stored record matches both fields exactly.
    pub fn check_credentials(&self, username: &str, password: &str) -> AuthResult<bool> {
        for record in self.users.scan()? {
            let user = record?;
            if user.username == username
                && constant_time_eq(user.password.as_bytes(), password.as_bytes())
            {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Logs a user in, returning the authenticated username.
    ///
    /// # Errors
    ///
    /// `AuthFailure` for an unknown username or a wrong password alike.
    pub fn login(&self, username: &str, password: &str) -> AuthResult<String> {
        if self.check_credentials(username, password)? {
            log_event_with_fields(Event::LoginSucceeded, &[("username", username)]);
            Ok(username.to_string())
        } else {
            log_event_with_fields(Event::LoginFailed, &[("username", username)]);
            Err(AuthError::AuthFailure)
        }
    }
}

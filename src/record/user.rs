//! User account record
//!
//! Credentials are stored in cleartext. This matches the existing file
//! format and is a known weakness of it.

use std::fmt;

use super::codec::{FieldReader, LineRecord, TextField};
use super::errors::RecordResult;

/// Legacy byte limit for usernames
pub const USERNAME_MAX: usize = 29;
/// Legacy byte limit for passwords
pub const PASSWORD_MAX: usize = 29;

/// A username/password pair
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps passwords out of debug output and logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LineRecord for User {
    const KIND: &'static str = "user";
    const FIELDS: &'static [&'static str] = &["username", "password"];

    fn text_fields(&self) -> Vec<TextField<'_>> {
        vec![
            TextField::new("username", &self.username, USERNAME_MAX),
            TextField::new("password", &self.password, PASSWORD_MAX),
        ]
    }

    fn encode_fields(&self) -> Vec<String> {
        vec![self.username.clone(), self.password.clone()]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> RecordResult<Self> {
        Ok(Self {
            username: fields.text()?,
            password: fields.text()?,
        })
    }
}

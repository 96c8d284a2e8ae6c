//! # hospitaldb Auth Module
//!
//! Account signup and login against the user store.
//!
//! Credentials are kept in cleartext in the user file, matching the
//! existing on-disk format. This is a known weakness of that format.

pub mod errors;
pub mod gate;

pub use errors::{AuthError, AuthResult};
pub use gate::AuthGate;

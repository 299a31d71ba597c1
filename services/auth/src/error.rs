//! Error types for the authentication flows

use common::error::DatabaseError;
use thiserror::Error;

/// Message shown when a flow fails for a reason the user cannot fix
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Custom error type for the authentication flows
#[derive(Error, Debug)]
pub enum AuthError {
    /// Email does not match the accepted address pattern
    #[error("Invalid email format")]
    InvalidEmailFormat,

    /// No user matches the email and password pair
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Signup for an email that already has an account
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    /// Password could not be hashed or the stored hash is unreadable
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl AuthError {
    /// Text to put in front of the user.
    ///
    /// Validation failures are shown as-is; storage and hashing failures
    /// collapse to [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidEmailFormat
            | AuthError::InvalidCredentials
            | AuthError::EmailAlreadyRegistered => self.to_string(),
            AuthError::PasswordHash(_) | AuthError::Database(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// True for failures caused by the input rather than the system
    pub fn is_user_error(&self) -> bool {
        !matches!(self, AuthError::PasswordHash(_) | AuthError::Database(_))
    }
}

/// Type alias for authentication results
pub type AuthResult<T> = Result<T, AuthError>;

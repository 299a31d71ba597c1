//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{AuthError, AuthResult};

/// Validate email
///
/// The whole input must match; there is no trimming.
pub fn validate_email(email: &str) -> AuthResult<()> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(AuthError::InvalidEmailFormat);
    }

    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

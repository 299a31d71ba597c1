//! Session flag model

use serde::{Deserialize, Serialize};

/// Persisted login state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionFlag {
    pub logged_in: bool,
    pub email: Option<String>,
}

impl SessionFlag {
    pub fn logged_in(email: impl Into<String>) -> Self {
        Self {
            logged_in: true,
            email: Some(email.into()),
        }
    }

    pub fn logged_out() -> Self {
        Self::default()
    }
}

//! Authentication models

pub mod session;
pub mod user;

// Re-export for convenience
pub use session::SessionFlag;
pub use user::{LoginCredentials, NewUser, User};

//! Common library for the storefront application
//!
//! This crate provides shared functionality used across the services,
//! including SQLite connectivity, schema setup, persistent preferences and
//! error handling.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, health_check, init_pool, migrate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config).await?;
//!     migrate(&pool).await?;
//!     println!("Database health check: {}", health_check(&pool).await?);
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
pub mod prefs;

pub use error::{DatabaseError, DatabaseResult};
pub use prefs::PreferenceStore;

//! Database module for handling SQLite connections and operations
//!
//! This module provides connection pooling, configuration, schema setup and
//! health checks for the local SQLite database.

use crate::error::{DatabaseError, DatabaseResult};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{env, str::FromStr, time::Duration};
use tracing::{error, info};

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Database configuration struct
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection acquire timeout in seconds
    pub connection_timeout: u64,
}

impl DatabaseConfig {
    /// Create a new DatabaseConfig from environment variables
    ///
    /// # Environment Variables
    /// - `DATABASE_URL`: SQLite connection URL (default: "sqlite://storefront.db")
    /// - `DATABASE_MAX_CONNECTIONS`: Maximum number of connections (default: 5)
    /// - `DATABASE_CONNECTION_TIMEOUT`: Acquire timeout in seconds (default: 30)
    pub fn from_env() -> DatabaseResult<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://storefront.db".to_string());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let connection_timeout = env::var("DATABASE_CONNECTION_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        if max_connections == 0 {
            return Err(DatabaseError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            database_url,
            max_connections,
            connection_timeout,
        })
    }

    /// Configuration for a private in-memory database.
    ///
    /// An in-memory SQLite database lives as long as its connection, so the
    /// pool is pinned to a single connection that never expires.
    pub fn in_memory() -> Self {
        Self {
            database_url: IN_MEMORY_URL.to_string(),
            max_connections: 1,
            connection_timeout: 30,
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

/// Initialize a SQLite connection pool
///
/// The database file is created when it does not exist yet.
///
/// # Arguments
///
/// * `config` - Database configuration
///
/// # Returns
///
/// * `DatabaseResult<SqlitePool>` - SQLite connection pool or error
pub async fn init_pool(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    info!("Initializing database connection pool");

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| DatabaseError::Configuration(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout));

    if config.is_in_memory() {
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(DatabaseError::Connection)?;

    info!("Database connection pool initialized successfully");
    Ok(pool)
}

/// Create the application tables when they are missing
///
/// Safe to run on every start.
pub async fn migrate(pool: &SqlitePool) -> DatabaseResult<()> {
    const STATEMENTS: [&str; 2] = [
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BLOB PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS preferences (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        )
        "#,
    ];

    for statement in STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DatabaseError::Migration(e.to_string()))?;
    }

    info!("Database schema is up to date");
    Ok(())
}

/// Check database connectivity
///
/// # Arguments
///
/// * `pool` - SQLite connection pool
///
/// # Returns
///
/// * `DatabaseResult<bool>` - True if the database answered, false otherwise
pub async fn health_check(pool: &SqlitePool) -> DatabaseResult<bool> {
    match sqlx::query("SELECT 1").fetch_one(pool).await {
        Ok(_) => {
            info!("Database health check successful");
            Ok(true)
        }
        Err(e) => {
            error!("Database health check failed: {}", e);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_database_config_from_env() {
        unsafe {
            std::env::remove_var("DATABASE_URL");
            std::env::remove_var("DATABASE_MAX_CONNECTIONS");
            std::env::remove_var("DATABASE_CONNECTION_TIMEOUT");
        }

        let config = DatabaseConfig::from_env().expect("Failed to create database config");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.connection_timeout, 30);
        assert_eq!(config.database_url, "sqlite://storefront.db");
    }

    #[test]
    #[serial]
    fn test_database_config_from_env_with_custom_values() {
        unsafe {
            std::env::set_var("DATABASE_URL", "sqlite://custom.db");
            std::env::set_var("DATABASE_MAX_CONNECTIONS", "2");
            std::env::set_var("DATABASE_CONNECTION_TIMEOUT", "5");
        }

        let config = DatabaseConfig::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite://custom.db");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.connection_timeout, 5);

        unsafe {
            std::env::remove_var("DATABASE_URL");
            std::env::remove_var("DATABASE_MAX_CONNECTIONS");
            std::env::remove_var("DATABASE_CONNECTION_TIMEOUT");
        }
    }

    #[test]
    #[serial]
    fn test_zero_max_connections_is_rejected() {
        unsafe {
            std::env::set_var("DATABASE_MAX_CONNECTIONS", "0");
        }

        let result = DatabaseConfig::from_env();
        assert!(matches!(result, Err(DatabaseError::Configuration(_))));

        unsafe {
            std::env::remove_var("DATABASE_MAX_CONNECTIONS");
        }
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() -> DatabaseResult<()> {
        let pool = init_pool(&DatabaseConfig::in_memory()).await?;
        migrate(&pool).await?;
        migrate(&pool).await?;
        assert!(health_check(&pool).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_configuration_error() {
        let config = DatabaseConfig {
            database_url: "sqlite://unused.db?mode=bogus".to_string(),
            max_connections: 1,
            connection_timeout: 1,
        };
        let result = init_pool(&config).await;
        assert!(matches!(result, Err(DatabaseError::Configuration(_))));
    }
}

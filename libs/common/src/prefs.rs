//! Persistent key-value preferences for the storefront application
//!
//! Small string values that must survive a restart (such as the login flag)
//! live in the `preferences` table. The API mirrors a plain key-value cache:
//! get, set and delete by key, with multi-key writes applied atomically.

use crate::error::{DatabaseError, DatabaseResult};
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// Key-value store backed by the `preferences` table
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    pool: SqlitePool,
}

impl PreferenceStore {
    /// Create a store on top of an initialized pool
    ///
    /// The schema must already exist, see [`crate::database::migrate`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Set a key, replacing any previous value
    pub async fn set(&self, key: &str, value: &str) -> DatabaseResult<()> {
        debug!("Setting preference {}", key);

        sqlx::query(
            r#"
            INSERT INTO preferences (key, value)
            VALUES ($1, $2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(())
    }

    /// Set several keys at once; either all of them are written or none
    pub async fn set_many(&self, entries: &[(&str, &str)]) -> DatabaseResult<()> {
        let mut tx = self.pool.begin().await.map_err(DatabaseError::Query)?;

        for &(key, value) in entries {
            debug!("Setting preference {}", key);
            sqlx::query(
                r#"
                INSERT INTO preferences (key, value)
                VALUES ($1, $2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value
                "#,
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(DatabaseError::Query)?;
        }

        tx.commit().await.map_err(DatabaseError::Query)?;
        Ok(())
    }

    /// Get a value by key
    pub async fn get(&self, key: &str) -> DatabaseResult<Option<String>> {
        let row = sqlx::query("SELECT value FROM preferences WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(row.map(|row| row.get("value")))
    }

    /// Delete several keys in one transaction. Missing keys are not an error.
    pub async fn delete_many(&self, keys: &[&str]) -> DatabaseResult<()> {
        let mut tx = self.pool.begin().await.map_err(DatabaseError::Query)?;

        for &key in keys {
            debug!("Deleting preference {}", key);
            sqlx::query("DELETE FROM preferences WHERE key = $1")
                .bind(key)
                .execute(&mut *tx)
                .await
                .map_err(DatabaseError::Query)?;
        }

        tx.commit().await.map_err(DatabaseError::Query)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{DatabaseConfig, init_pool, migrate};

    async fn store() -> DatabaseResult<PreferenceStore> {
        let pool = init_pool(&DatabaseConfig::in_memory()).await?;
        migrate(&pool).await?;
        Ok(PreferenceStore::new(pool))
    }

    #[tokio::test]
    async fn test_set_get_delete() -> DatabaseResult<()> {
        let prefs = store().await?;

        assert_eq!(prefs.get("user_email").await?, None);

        prefs.set("user_email", "a@b.com").await?;
        assert_eq!(prefs.get("user_email").await?, Some("a@b.com".to_string()));

        prefs.delete_many(&["user_email"]).await?;
        assert_eq!(prefs.get("user_email").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_overwrites() -> DatabaseResult<()> {
        let prefs = store().await?;

        prefs.set("is_logged_in", "false").await?;
        prefs.set("is_logged_in", "true").await?;
        assert_eq!(prefs.get("is_logged_in").await?, Some("true".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_set_many_and_delete_many() -> DatabaseResult<()> {
        let prefs = store().await?;

        prefs.set_many(&[("a", "1"), ("b", "2")]).await?;
        assert_eq!(prefs.get("a").await?, Some("1".to_string()));
        assert_eq!(prefs.get("b").await?, Some("2".to_string()));

        prefs.delete_many(&["a", "b"]).await?;
        assert_eq!(prefs.get("a").await?, None);
        assert_eq!(prefs.get("b").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_many_rolls_back_on_failure() -> DatabaseResult<()> {
        let prefs = store().await?;
        sqlx::query(
            r#"
            CREATE TRIGGER reject_b BEFORE INSERT ON preferences
            WHEN NEW.key = 'b'
            BEGIN SELECT RAISE(ABORT, 'rejected'); END
            "#,
        )
        .execute(&prefs.pool)
        .await
        .map_err(DatabaseError::Query)?;

        assert!(prefs.set_many(&[("a", "1"), ("b", "2")]).await.is_err());
        assert_eq!(prefs.get("a").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_key() -> DatabaseResult<()> {
        let prefs = store().await?;
        prefs.delete_many(&["never-set"]).await?;
        Ok(())
    }
}

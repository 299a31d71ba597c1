//! User repository for database operations

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use chrono::Utc;
use common::error::DatabaseError;
use sqlx::SqlitePool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};
use crate::models::{NewUser, User};

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
    argon2: Argon2<'static>,
}

impl UserRepository {
    /// Create a new user repository with the default argon2 parameters
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_hasher(pool, Argon2::default())
    }

    /// Create a user repository that hashes new passwords with `argon2`
    ///
    /// Verification always uses the parameters stored in each hash, so
    /// changing the hasher does not invalidate existing users.
    pub fn with_hasher(pool: SqlitePool, argon2: Argon2<'static>) -> Self {
        Self { pool, argon2 }
    }

    /// Create a new user
    ///
    /// A concurrent signup that wins the race to the same email surfaces as
    /// [`AuthError::EmailAlreadyRegistered`] through the `UNIQUE` constraint.
    pub async fn create(&self, new_user: &NewUser) -> AuthResult<User> {
        info!("Creating new user: {}", new_user.email);

        let salt = SaltString::generate(&mut rand::thread_rng());
        let password_hash = self
            .argon2
            .hash_password(new_user.password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHash(format!("Failed to hash password: {}", e)))?
            .to_string();

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query);

        match result {
            Ok(user) => Ok(user),
            Err(e) if e.is_unique_violation() => {
                warn!("Email {} was registered concurrently", new_user.email);
                Err(AuthError::EmailAlreadyRegistered)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Find a user by exact (case-sensitive) email
    pub async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        info!("Finding user by email: {}", email);

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(user)
    }

    /// Check whether an account exists for `email`
    pub async fn exists_by_email(&self, email: &str) -> AuthResult<bool> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(count > 0)
    }

    /// Find the user matching both email and password
    pub async fn find_by_credentials(&self, email: &str, password: &str) -> AuthResult<Option<User>> {
        let Some(user) = self.find_by_email(email).await? else {
            return Ok(None);
        };

        if self.verify_password(&user, password)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Verify a user's password
    pub fn verify_password(&self, user: &User, password: &str) -> AuthResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| AuthError::PasswordHash(format!("Failed to parse password hash: {}", e)))?;

        let result = self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }
}

//! Authentication for the storefront application
//!
//! Local user accounts stored in SQLite, the persisted login session, and
//! the login and signup flows built on top of them.

pub mod error;
pub mod login;
pub mod models;
pub mod repositories;
pub mod session;
pub mod signup;
pub mod validation;

pub use error::{AuthError, AuthResult};
pub use login::{LoginEvent, LoginFlow, LoginState, LoginStatus};
pub use models::{LoginCredentials, NewUser, SessionFlag, User};
pub use repositories::UserRepository;
pub use session::SessionManager;
pub use signup::{
    SIGNUP_SUCCESS_MESSAGE, SignupEvent, SignupFlow, SignupForm, SignupState, SignupStatus,
};

#[cfg(test)]
pub(crate) mod test_support {
    use argon2::{Algorithm, Argon2, Params, Version};
    use common::database::{DatabaseConfig, init_pool, migrate};
    use sqlx::SqlitePool;

    use crate::repositories::UserRepository;

    pub async fn pool() -> SqlitePool {
        let pool = init_pool(&DatabaseConfig::in_memory())
            .await
            .expect("in-memory pool");
        migrate(&pool).await.expect("schema");
        pool
    }

    /// Cheapest argon2 parameters, to keep hashing out of test runtime
    pub fn fast_hasher() -> Argon2<'static> {
        let params = Params::new(Params::MIN_M_COST, 1, 1, None).expect("argon2 params");
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }

    pub fn repository_on(pool: SqlitePool) -> UserRepository {
        UserRepository::with_hasher(pool, fast_hasher())
    }

    pub async fn repository() -> UserRepository {
        repository_on(pool().await)
    }
}

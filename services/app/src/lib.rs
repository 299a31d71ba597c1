//! Storefront application shell
//!
//! Wires the database, session, authentication flows and display metrics
//! together and decides which screen the application opens on.

pub mod home;
pub mod navigation;
pub mod settings;

use anyhow::Result;
use auth::{LoginFlow, SessionManager, SignupFlow, UserRepository};
use common::{
    PreferenceStore,
    database::{self, DatabaseConfig},
};
use responsive::ResponsiveText;
use sqlx::SqlitePool;
use tracing::info;

use crate::{navigation::Screen, settings::AppConfig};

/// Application state shared across screens
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub user_repository: UserRepository,
    pub session: SessionManager,
    pub login: LoginFlow,
    pub signup: SignupFlow,
    pub text: ResponsiveText,
}

impl AppState {
    /// Open the database, prepare the schema and build the services
    ///
    /// The session is not loaded yet; see [`AppState::start`].
    pub async fn initialize(app_config: &AppConfig, db_config: &DatabaseConfig) -> Result<Self> {
        let pool = database::init_pool(db_config).await?;
        database::migrate(&pool).await?;

        if database::health_check(&pool).await? {
            info!("Database connection successful");
        } else {
            anyhow::bail!("Failed to connect to database");
        }

        Ok(Self::with_repository(
            pool.clone(),
            UserRepository::new(pool),
            ResponsiveText::new(app_config.display.metrics()?),
        ))
    }

    /// Build the services around an existing pool and repository
    pub fn with_repository(
        db_pool: SqlitePool,
        user_repository: UserRepository,
        text: ResponsiveText,
    ) -> Self {
        let session = SessionManager::new(PreferenceStore::new(db_pool.clone()));

        Self {
            login: LoginFlow::new(user_repository.clone(), session.clone()),
            signup: SignupFlow::new(user_repository.clone()),
            db_pool,
            user_repository,
            session,
            text,
        }
    }

    /// Load the persisted session and pick the first screen
    pub async fn start(&self) -> Result<Screen> {
        self.session.load().await?;
        let screen = navigation::start_destination(self.session.current().as_ref());
        info!("Starting on screen: {}", screen.route());
        Ok(screen)
    }
}

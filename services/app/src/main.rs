use anyhow::Result;
use common::database::DatabaseConfig;
use responsive::{DeviceInfo, TextStyle};
use storefront_app::{AppState, home::HomeScreen, navigation::Screen, settings::AppConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = AppConfig::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&app_config.log_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting storefront application");

    let db_config = DatabaseConfig::from_env()?;
    let state = AppState::initialize(&app_config, &db_config).await?;

    let device = DeviceInfo::from_metrics(state.text.metrics());
    info!(
        category = %device.category,
        body_large = state.text.size(TextStyle::BodyLarge),
        "Display profile: {}",
        serde_json::to_string(&device)?
    );

    match state.start().await? {
        Screen::Home => {
            let home = HomeScreen::load(&state.user_repository, state.session.current().as_ref())
                .await?;
            info!("{}", home.title);
        }
        screen => info!("Waiting on the {} screen", screen.route()),
    }

    state.db_pool.close().await;
    Ok(())
}

//! Application configuration
//!
//! Values come from built-in defaults overridden by `APP_*` environment
//! variables, with `__` separating nested keys
//! (`APP_DISPLAY__WIDTH_PX=1440`). Database settings are read separately by
//! [`common::database::DatabaseConfig::from_env`].

use anyhow::Result;
use config::{Config, ConfigError, Environment};
use responsive::{DisplayMetrics, metrics::BASELINE_DPI};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Default tracing filter when `RUST_LOG` is not set
    pub log_level: String,
    pub display: DisplayConfig,
}

/// Metrics of the display the text sizes are computed for
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub width_px: f32,
    pub height_px: f32,
    pub density: f32,
    /// Defaults to `density * 160`
    pub xdpi: Option<f32>,
    /// Defaults to `density * 160`
    pub ydpi: Option<f32>,
}

impl AppConfig {
    /// Load defaults and apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("display.width_px", 1080.0)?
            .set_default("display.height_px", 2400.0)?
            .set_default("display.density", 3.0)?
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl DisplayConfig {
    /// Validated metrics for this display
    pub fn metrics(&self) -> Result<DisplayMetrics> {
        let fallback_dpi = self.density * BASELINE_DPI;
        let metrics = DisplayMetrics::new(
            self.width_px,
            self.height_px,
            self.density,
            self.xdpi.unwrap_or(fallback_dpi),
            self.ydpi.unwrap_or(fallback_dpi),
        )?;
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.display.width_px, 1080.0);
        assert_eq!(config.display.xdpi, None);

        let metrics = config.display.metrics().unwrap();
        assert_eq!(metrics.xdpi, 480.0);
        assert_eq!(metrics.width_dp(), 360.0);
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        unsafe {
            std::env::set_var("APP_LOG_LEVEL", "debug");
            std::env::set_var("APP_DISPLAY__WIDTH_PX", "1600");
            std::env::set_var("APP_DISPLAY__DENSITY", "2");
            std::env::set_var("APP_DISPLAY__XDPI", "300");
        }

        let config = AppConfig::load().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.display.width_px, 1600.0);
        assert_eq!(config.display.density, 2.0);
        assert_eq!(config.display.xdpi, Some(300.0));
        assert_eq!(config.display.metrics().unwrap().ydpi, 320.0);

        unsafe {
            std::env::remove_var("APP_LOG_LEVEL");
            std::env::remove_var("APP_DISPLAY__WIDTH_PX");
            std::env::remove_var("APP_DISPLAY__DENSITY");
            std::env::remove_var("APP_DISPLAY__XDPI");
        }
    }

    #[test]
    fn test_invalid_display_is_rejected() {
        let display = DisplayConfig {
            width_px: 1080.0,
            height_px: 2400.0,
            density: 0.0,
            xdpi: None,
            ydpi: None,
        };
        assert!(display.metrics().is_err());
    }
}

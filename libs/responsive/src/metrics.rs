//! Display metrics and the derived screen measurements

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pixels per inch at density 1.0; one dp is one pixel at this density.
pub const BASELINE_DPI: f32 = 160.0;

/// Rejected display metrics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("{0} must not be negative")]
    Negative(&'static str),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
}

/// Raw metrics reported by a display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    pub width_px: f32,
    pub height_px: f32,
    /// Logical density, 1.0 at 160 dpi
    pub density: f32,
    /// Physical pixels per inch along X
    pub xdpi: f32,
    /// Physical pixels per inch along Y
    pub ydpi: f32,
}

impl DisplayMetrics {
    /// Validated constructor.
    ///
    /// Pixel sizes must be finite and non-negative; density and both dpi
    /// values must be finite and strictly positive since they are divisors.
    pub fn new(
        width_px: f32,
        height_px: f32,
        density: f32,
        xdpi: f32,
        ydpi: f32,
    ) -> Result<Self, MetricsError> {
        non_negative("width_px", width_px)?;
        non_negative("height_px", height_px)?;
        positive("density", density)?;
        positive("xdpi", xdpi)?;
        positive("ydpi", ydpi)?;

        Ok(Self {
            width_px,
            height_px,
            density,
            xdpi,
            ydpi,
        })
    }

    /// Metrics for a display whose physical dpi matches its logical density
    pub fn with_density(width_px: f32, height_px: f32, density: f32) -> Result<Self, MetricsError> {
        let dpi = density * BASELINE_DPI;
        Self::new(width_px, height_px, density, dpi, dpi)
    }

    pub fn width_dp(&self) -> f32 {
        self.width_px / self.density
    }

    pub fn height_dp(&self) -> f32 {
        self.height_px / self.density
    }

    /// Screen area in dp²
    pub fn area_dp(&self) -> f32 {
        self.width_dp() * self.height_dp()
    }

    /// Screen diagonal in dp
    pub fn diagonal_dp(&self) -> f32 {
        self.width_dp().hypot(self.height_dp())
    }

    /// Physical diagonal in inches, from the per-axis dpi
    pub fn diagonal_inches(&self) -> f32 {
        let width_in = self.width_px / self.xdpi;
        let height_in = self.height_px / self.ydpi;
        width_in.hypot(height_in)
    }

    /// Density bucket in dots per inch (160 for density 1.0)
    pub fn density_dpi(&self) -> u32 {
        (self.density * BASELINE_DPI).round() as u32
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), MetricsError> {
    if !value.is_finite() {
        return Err(MetricsError::NotFinite(field));
    }
    if value < 0.0 {
        return Err(MetricsError::Negative(field));
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), MetricsError> {
    non_negative(field, value)?;
    if value == 0.0 {
        return Err(MetricsError::NotPositive(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_conversion() {
        let metrics = DisplayMetrics::with_density(1080.0, 2400.0, 3.0).unwrap();
        assert_eq!(metrics.width_dp(), 360.0);
        assert_eq!(metrics.height_dp(), 800.0);
        assert_eq!(metrics.area_dp(), 288_000.0);
        assert_eq!(metrics.density_dpi(), 480);
    }

    #[test]
    fn test_diagonal() {
        let metrics = DisplayMetrics::with_density(300.0, 400.0, 1.0).unwrap();
        assert_eq!(metrics.diagonal_dp(), 500.0);

        let inches = DisplayMetrics::new(300.0, 400.0, 1.0, 100.0, 100.0).unwrap();
        assert_eq!(inches.diagonal_inches(), 5.0);
    }

    #[test]
    fn test_rejects_invalid_metrics() {
        assert_eq!(
            DisplayMetrics::new(-1.0, 10.0, 1.0, 160.0, 160.0),
            Err(MetricsError::Negative("width_px"))
        );
        assert_eq!(
            DisplayMetrics::new(10.0, f32::NAN, 1.0, 160.0, 160.0),
            Err(MetricsError::NotFinite("height_px"))
        );
        assert_eq!(
            DisplayMetrics::new(10.0, 10.0, 0.0, 160.0, 160.0),
            Err(MetricsError::NotPositive("density"))
        );
        assert_eq!(
            DisplayMetrics::new(10.0, 10.0, 1.0, f32::INFINITY, 160.0),
            Err(MetricsError::NotFinite("xdpi"))
        );
    }

    #[test]
    fn test_zero_sized_display_is_allowed() {
        let metrics = DisplayMetrics::with_density(0.0, 0.0, 2.0).unwrap();
        assert_eq!(metrics.area_dp(), 0.0);
    }
}

//! Step functions that turn screen measurements into text scale factors
//!
//! Every table is half-open: a value equal to a breakpoint belongs to the
//! band above it. Inputs are expected to be finite and non-negative; use
//! [`DisplayMetrics::new`] to enforce that for values coming from a device.

use crate::metrics::{BASELINE_DPI, DisplayMetrics};

/// Lower and upper bound applied to the combined scale
pub const MIN_SCALE: f32 = 0.6;
pub const MAX_SCALE: f32 = 1.8;

const AREA_WEIGHT: f32 = 0.4;
const DIAGONAL_WEIGHT: f32 = 0.3;
const DENSITY_WEIGHT: f32 = 0.3;

/// `(exclusive upper bound, scale)` pairs followed by the scale for anything larger
struct StepTable {
    bands: &'static [(f32, f32)],
    above: f32,
}

impl StepTable {
    fn lookup(&self, value: f32) -> f32 {
        self.bands
            .iter()
            .find(|(upper, _)| value < *upper)
            .map(|(_, scale)| *scale)
            .unwrap_or(self.above)
    }
}

const AREA: StepTable = StepTable {
    bands: &[
        (150_000.0, 0.8),
        (200_000.0, 0.9),
        (300_000.0, 1.0),
        (500_000.0, 1.1),
        (800_000.0, 1.2),
    ],
    above: 1.3,
};

const DIAGONAL: StepTable = StepTable {
    bands: &[
        (400.0, 0.8),
        (500.0, 0.9),
        (600.0, 1.0),
        (700.0, 1.1),
        (800.0, 1.2),
    ],
    above: 1.3,
};

const DENSITY: StepTable = StepTable {
    bands: &[(1.5, 0.9), (2.0, 1.0), (2.5, 1.05), (3.0, 1.1)],
    above: 1.15,
};

const WIDTH: StepTable = StepTable {
    bands: &[
        (300.0, 0.8),
        (360.0, 0.9),
        (400.0, 1.0),
        (500.0, 1.1),
        (600.0, 1.2),
    ],
    above: 1.3,
};

const HEIGHT: StepTable = StepTable {
    bands: &[
        (500.0, 0.8),
        (600.0, 0.9),
        (700.0, 1.0),
        (800.0, 1.1),
        (1000.0, 1.2),
    ],
    above: 1.3,
};

/// Scale for a screen area in dp²
pub fn scale_by_area(area_dp: f32) -> f32 {
    AREA.lookup(area_dp)
}

/// Scale for a screen diagonal in dp
pub fn scale_by_diagonal(diagonal_dp: f32) -> f32 {
    DIAGONAL.lookup(diagonal_dp)
}

/// Scale for a logical density (1.0 = 160 dpi)
pub fn scale_by_density(density: f32) -> f32 {
    DENSITY.lookup(density)
}

/// Scale for a screen width in dp
pub fn scale_by_width(width_dp: f32) -> f32 {
    WIDTH.lookup(width_dp)
}

/// Scale for a screen height in dp
pub fn scale_by_height(height_dp: f32) -> f32 {
    HEIGHT.lookup(height_dp)
}

/// Weighted blend of the area, diagonal and density scales, clamped to
/// [`MIN_SCALE`]..=[`MAX_SCALE`]
pub fn combined_scale(metrics: &DisplayMetrics) -> f32 {
    let blended = AREA_WEIGHT * scale_by_area(metrics.area_dp())
        + DIAGONAL_WEIGHT * scale_by_diagonal(metrics.diagonal_dp())
        + DENSITY_WEIGHT * scale_by_density(metrics.density);

    blended.clamp(MIN_SCALE, MAX_SCALE)
}

/// Font size after applying [`combined_scale`]
pub fn scaled_size(base: f32, metrics: &DisplayMetrics) -> f32 {
    base * combined_scale(metrics)
}

/// Font size scaled by the screen width alone
pub fn size_by_width(base: f32, metrics: &DisplayMetrics) -> f32 {
    base * scale_by_width(metrics.width_dp())
}

/// Font size scaled by the screen height alone
pub fn size_by_height(base: f32, metrics: &DisplayMetrics) -> f32 {
    base * scale_by_height(metrics.height_dp())
}

/// Font size scaled by the physical diagonal, expressed in dp-equivalent
/// units (inches × 160) before the diagonal table is applied
pub fn size_by_diagonal(base: f32, metrics: &DisplayMetrics) -> f32 {
    base * scale_by_diagonal(metrics.diagonal_inches() * BASELINE_DPI)
}

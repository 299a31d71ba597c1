//! Responsive text sizing
//!
//! Scales font sizes by the size and density of the display they are shown
//! on. All functions are pure; [`DisplayMetrics`] is the only input.
//!
//! ```rust
//! use responsive::{DisplayMetrics, ResponsiveText, TextStyle};
//!
//! let metrics = DisplayMetrics::with_density(1080.0, 2400.0, 3.0).unwrap();
//! let text = ResponsiveText::new(metrics);
//! let body = text.size(TextStyle::BodyLarge);
//! assert!(body > 16.0);
//! ```

pub mod device;
pub mod metrics;
pub mod scale;
pub mod text_sizes;

pub use device::{DeviceCategory, DeviceConfiguration, DeviceInfo, ScaleBreakdown, SizeClass};
pub use metrics::{DisplayMetrics, MetricsError};
pub use scale::{
    MAX_SCALE, MIN_SCALE, combined_scale, scale_by_area, scale_by_density, scale_by_diagonal,
    scale_by_height, scale_by_width, scaled_size, size_by_diagonal, size_by_height,
    size_by_width,
};
pub use text_sizes::{ResponsiveText, TextStyle};

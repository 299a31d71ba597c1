//! Device classification and the debug report shown on the text size screen

use serde::Serialize;
use std::fmt;

use crate::metrics::DisplayMetrics;
use crate::scale::{
    scale_by_area, scale_by_density, scale_by_diagonal, scale_by_height, scale_by_width,
};

/// Coarse device class derived from the screen area in dp²
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceCategory {
    SmallPhone,
    MediumPhone,
    LargePhone,
    SmallTablet,
    MediumTablet,
    LargeTablet,
}

impl DeviceCategory {
    /// Uses the same area breakpoints as [`scale_by_area`]
    pub fn from_area(area_dp: f32) -> Self {
        match area_dp {
            a if a < 150_000.0 => Self::SmallPhone,
            a if a < 200_000.0 => Self::MediumPhone,
            a if a < 300_000.0 => Self::LargePhone,
            a if a < 500_000.0 => Self::SmallTablet,
            a if a < 800_000.0 => Self::MediumTablet,
            _ => Self::LargeTablet,
        }
    }

    pub fn from_metrics(metrics: &DisplayMetrics) -> Self {
        Self::from_area(metrics.area_dp())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SmallPhone => "Small Phone",
            Self::MediumPhone => "Medium Phone",
            Self::LargePhone => "Large Phone",
            Self::SmallTablet => "Small Tablet",
            Self::MediumTablet => "Medium Tablet",
            Self::LargeTablet => "Large Tablet",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Window size class on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeClass {
    Compact,
    Medium,
    Expanded,
}

impl SizeClass {
    /// Width classes: compact below 600 dp, medium below 840 dp
    pub fn for_width(width_dp: f32) -> Self {
        match width_dp {
            w if w < 600.0 => Self::Compact,
            w if w < 840.0 => Self::Medium,
            _ => Self::Expanded,
        }
    }

    /// Height classes: compact below 480 dp, medium below 900 dp
    pub fn for_height(height_dp: f32) -> Self {
        match height_dp {
            h if h < 480.0 => Self::Compact,
            h if h < 900.0 => Self::Medium,
            _ => Self::Expanded,
        }
    }
}

/// Layout family chosen from the window size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceConfiguration {
    MobilePortrait,
    MobileLandscape,
    TabletPortrait,
    TabletLandscape,
    Desktop,
}

impl DeviceConfiguration {
    pub fn from_size_classes(width: SizeClass, height: SizeClass) -> Self {
        use SizeClass::*;

        match (width, height) {
            (Compact, Medium) | (Compact, Expanded) => Self::MobilePortrait,
            (Expanded, Compact) => Self::MobileLandscape,
            (Medium, Expanded) => Self::TabletPortrait,
            (Expanded, Medium) => Self::TabletLandscape,
            _ => Self::Desktop,
        }
    }

    pub fn from_metrics(metrics: &DisplayMetrics) -> Self {
        Self::from_size_classes(
            SizeClass::for_width(metrics.width_dp()),
            SizeClass::for_height(metrics.height_dp()),
        )
    }
}

/// Individual scale factors for a display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleBreakdown {
    pub area: f32,
    pub diagonal: f32,
    pub density: f32,
    pub width: f32,
    pub height: f32,
}

/// Snapshot of everything the scaling utilities know about a display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceInfo {
    pub width_px: f32,
    pub height_px: f32,
    pub width_dp: f32,
    pub height_dp: f32,
    pub area_dp: f32,
    pub diagonal_dp: f32,
    pub diagonal_inches: f32,
    pub density: f32,
    pub density_dpi: u32,
    pub xdpi: f32,
    pub ydpi: f32,
    pub category: DeviceCategory,
    pub configuration: DeviceConfiguration,
    pub scales: ScaleBreakdown,
}

impl DeviceInfo {
    pub fn from_metrics(metrics: &DisplayMetrics) -> Self {
        let width_dp = metrics.width_dp();
        let height_dp = metrics.height_dp();
        let area_dp = metrics.area_dp();
        let diagonal_dp = metrics.diagonal_dp();

        Self {
            width_px: metrics.width_px,
            height_px: metrics.height_px,
            width_dp,
            height_dp,
            area_dp,
            diagonal_dp,
            diagonal_inches: metrics.diagonal_inches(),
            density: metrics.density,
            density_dpi: metrics.density_dpi(),
            xdpi: metrics.xdpi,
            ydpi: metrics.ydpi,
            category: DeviceCategory::from_area(area_dp),
            configuration: DeviceConfiguration::from_metrics(metrics),
            scales: ScaleBreakdown {
                area: scale_by_area(area_dp),
                diagonal: scale_by_diagonal(diagonal_dp),
                density: scale_by_density(metrics.density),
                width: scale_by_width(width_dp),
                height: scale_by_height(height_dp),
            },
        }
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Screen Dimensions:")?;
        writeln!(f, "- Width: {:.0}px ({:.1}dp)", self.width_px, self.width_dp)?;
        writeln!(f, "- Height: {:.0}px ({:.1}dp)", self.height_px, self.height_dp)?;
        writeln!(f, "- Area: {:.0} dp²", self.area_dp)?;
        writeln!(
            f,
            "- Diagonal: {:.1} dp ({:.1} inches)",
            self.diagonal_dp, self.diagonal_inches
        )?;
        writeln!(f)?;
        writeln!(f, "Density Information:")?;
        writeln!(f, "- Density: {:?}", self.density)?;
        writeln!(f, "- Density DPI: {}", self.density_dpi)?;
        writeln!(f, "- X DPI: {:.1}", self.xdpi)?;
        writeln!(f, "- Y DPI: {:.1}", self.ydpi)?;
        writeln!(f)?;
        writeln!(f, "Calculated Scales:")?;
        writeln!(f, "- Area Scale: {:.2}", self.scales.area)?;
        writeln!(f, "- Diagonal Scale: {:.2}", self.scales.diagonal)?;
        writeln!(f, "- Density Scale: {:.2}", self.scales.density)?;
        writeln!(f, "- Width Scale: {:.2}", self.scales.width)?;
        write!(f, "- Height Scale: {:.2}", self.scales.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_follows_area_bands() {
        assert_eq!(DeviceCategory::from_area(149_999.0), DeviceCategory::SmallPhone);
        assert_eq!(DeviceCategory::from_area(150_000.0), DeviceCategory::MediumPhone);
        assert_eq!(DeviceCategory::from_area(250_000.0), DeviceCategory::LargePhone);
        assert_eq!(DeviceCategory::from_area(300_000.0), DeviceCategory::SmallTablet);
        assert_eq!(DeviceCategory::from_area(500_000.0), DeviceCategory::MediumTablet);
        assert_eq!(DeviceCategory::from_area(800_000.0), DeviceCategory::LargeTablet);
        assert_eq!(DeviceCategory::MediumTablet.to_string(), "Medium Tablet");
    }

    #[test]
    fn test_configuration_table() {
        use SizeClass::*;

        let cases = [
            (Compact, Medium, DeviceConfiguration::MobilePortrait),
            (Compact, Expanded, DeviceConfiguration::MobilePortrait),
            (Expanded, Compact, DeviceConfiguration::MobileLandscape),
            (Medium, Expanded, DeviceConfiguration::TabletPortrait),
            (Expanded, Medium, DeviceConfiguration::TabletLandscape),
            (Compact, Compact, DeviceConfiguration::Desktop),
            (Medium, Medium, DeviceConfiguration::Desktop),
            (Expanded, Expanded, DeviceConfiguration::Desktop),
        ];

        for (width, height, expected) in cases {
            assert_eq!(
                DeviceConfiguration::from_size_classes(width, height),
                expected,
                "{width:?} x {height:?}"
            );
        }
    }

    #[test]
    fn test_phone_in_portrait_and_landscape() {
        let portrait = DisplayMetrics::with_density(1080.0, 2400.0, 3.0).unwrap();
        assert_eq!(
            DeviceConfiguration::from_metrics(&portrait),
            DeviceConfiguration::MobilePortrait
        );

        // 900 x 400 dp: expanded width, compact height
        let landscape = DisplayMetrics::with_density(2700.0, 1200.0, 3.0).unwrap();
        assert_eq!(
            DeviceConfiguration::from_metrics(&landscape),
            DeviceConfiguration::MobileLandscape
        );

        // 1280 x 540 dp
        let tablet = DisplayMetrics::with_density(2560.0, 1080.0, 2.0).unwrap();
        assert_eq!(
            DeviceConfiguration::from_metrics(&tablet),
            DeviceConfiguration::TabletLandscape
        );
    }

    #[test]
    fn test_medium_width_compact_height_is_desktop() {
        // 800 x 360 dp: medium width has no landscape mapping in the table
        let phone_on_side = DisplayMetrics::with_density(2400.0, 1080.0, 3.0).unwrap();
        assert_eq!(
            DeviceConfiguration::from_metrics(&phone_on_side),
            DeviceConfiguration::Desktop
        );
    }

    #[test]
    fn test_device_info_report() {
        let metrics = DisplayMetrics::with_density(1080.0, 2400.0, 3.0).unwrap();
        let info = DeviceInfo::from_metrics(&metrics);

        assert_eq!(info.category, DeviceCategory::LargePhone);
        assert_eq!(info.scales.width, 1.0);
        assert_eq!(info.scales.density, 1.15);

        let text = info.to_string();
        assert!(text.starts_with("Screen Dimensions:"));
        assert!(text.contains("- Width: 1080px (360.0dp)"));
        assert!(text.contains("- Area: 288000 dp²"));
        assert!(text.contains("- Density: 3.0\n"));
        assert!(text.contains("- Density DPI: 480"));
        assert!(text.ends_with("- Height Scale: 1.20"));

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["category"], "LargePhone");
        assert_eq!(json["configuration"], "MobilePortrait");
    }
}

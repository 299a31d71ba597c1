//! Preset text styles and a per-display helper that scales them

use crate::device::DeviceCategory;
use crate::metrics::DisplayMetrics;
use crate::scale::{scaled_size, size_by_diagonal, size_by_height, size_by_width};

/// Typography roles with their unscaled size in sp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    HeadlineLarge,
    HeadlineMedium,
    HeadlineSmall,
    TitleLarge,
    TitleMedium,
    TitleSmall,
    BodyLarge,
    BodyMedium,
    BodySmall,
    LabelLarge,
    LabelMedium,
    LabelSmall,
}

impl TextStyle {
    pub const ALL: [TextStyle; 12] = [
        TextStyle::HeadlineLarge,
        TextStyle::HeadlineMedium,
        TextStyle::HeadlineSmall,
        TextStyle::TitleLarge,
        TextStyle::TitleMedium,
        TextStyle::TitleSmall,
        TextStyle::BodyLarge,
        TextStyle::BodyMedium,
        TextStyle::BodySmall,
        TextStyle::LabelLarge,
        TextStyle::LabelMedium,
        TextStyle::LabelSmall,
    ];

    pub fn base_size(&self) -> f32 {
        match self {
            TextStyle::HeadlineLarge => 32.0,
            TextStyle::HeadlineMedium => 28.0,
            TextStyle::HeadlineSmall => 24.0,
            TextStyle::TitleLarge => 22.0,
            TextStyle::TitleMedium => 16.0,
            TextStyle::TitleSmall => 14.0,
            TextStyle::BodyLarge => 16.0,
            TextStyle::BodyMedium => 14.0,
            TextStyle::BodySmall => 12.0,
            TextStyle::LabelLarge => 14.0,
            TextStyle::LabelMedium => 12.0,
            TextStyle::LabelSmall => 11.0,
        }
    }
}

/// Text sizing bound to one display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveText {
    metrics: DisplayMetrics,
}

impl ResponsiveText {
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    pub fn size(&self, style: TextStyle) -> f32 {
        self.custom(style.base_size())
    }

    pub fn custom(&self, base: f32) -> f32 {
        scaled_size(base, &self.metrics)
    }

    pub fn by_width(&self, base: f32) -> f32 {
        size_by_width(base, &self.metrics)
    }

    pub fn by_height(&self, base: f32) -> f32 {
        size_by_height(base, &self.metrics)
    }

    pub fn by_diagonal(&self, base: f32) -> f32 {
        size_by_diagonal(base, &self.metrics)
    }

    pub fn category(&self) -> DeviceCategory {
        DeviceCategory::from_metrics(&self.metrics)
    }
}

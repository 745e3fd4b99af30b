use crate::rendering::primitives::Color;
use log::warn;

/// Visual styling for the chart diagram
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    /// Side length of the square chart, in px
    pub size: f32,
    pub background_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f32,
    pub diamond_stroke_width: f32,
    pub house_number_color: Color,
    pub house_number_size: f32,
    pub planet_color: Color,
    pub planet_label_size: f32,
    /// Gap between a house number and its first planet label
    pub label_offset: f32,
    /// Vertical distance between stacked planet labels
    pub label_spacing: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            size: 500.0,
            background_color: Color::WHITE,
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
            diamond_stroke_width: 2.0,
            house_number_color: Color::BLACK,
            house_number_size: 16.0,
            planet_color: Color::BLUE,
            planet_label_size: 12.0,
            label_offset: 20.0,
            label_spacing: 14.0,
        }
    }
}

impl VisualConfig {
    pub fn with_size(size: f32) -> Self {
        let base = Self::default();
        let k = size / base.size;
        Self {
            size,
            house_number_size: base.house_number_size * k,
            planet_label_size: base.planet_label_size * k,
            label_offset: base.label_offset * k,
            label_spacing: base.label_spacing * k,
            ..base
        }
    }
}

impl From<&natal_config::ChartLayoutSettings> for VisualConfig {
    fn from(settings: &natal_config::ChartLayoutSettings) -> Self {
        let mut config = Self::with_size(settings.size);
        if let Some(hex) = &settings.planet_color {
            match Color::from_hex(hex) {
                Some(color) => config.planet_color = color,
                None => warn!("Ignoring invalid chart.planet_color {hex:?}"),
            }
        }
        config
    }
}

pub mod generator;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use generator::{planet_label, ChartSpecGenerator};
pub use spec::ChartSpec;
pub use svg::to_svg;
pub use visual_config::VisualConfig;

use crate::western::ZodiacPlacement;

/// Lay out placements and serialize straight to SVG.
pub fn render_svg(placements: &[ZodiacPlacement], config: VisualConfig) -> String {
    to_svg(&ChartSpecGenerator::with_config(config).generate(placements))
}

//! Diamond chart layout.
//!
//! A square with both diagonals and an inscribed diamond gives twelve
//! triangular and rhombic cells. House 1 is the top center cell; houses run
//! counter-clockwise from there.

use crate::rendering::primitives::{Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;
use crate::rendering::visual_config::VisualConfig;
use crate::western::ZodiacPlacement;

/// Base layout size the anchors below are expressed in.
const BASE_SIZE: f32 = 500.0;

/// House number anchor for houses 1..=12 on a 500 x 500 chart.
const HOUSE_ANCHORS: [Point; 12] = [
    Point::new(250.0, 100.0),
    Point::new(120.0, 40.0),
    Point::new(40.0, 130.0),
    Point::new(120.0, 250.0),
    Point::new(40.0, 370.0),
    Point::new(120.0, 440.0),
    Point::new(250.0, 360.0),
    Point::new(370.0, 440.0),
    Point::new(450.0, 370.0),
    Point::new(370.0, 250.0),
    Point::new(440.0, 130.0),
    Point::new(370.0, 40.0),
];

/// ChartSpec generator - lays placements out on the diamond chart
pub struct ChartSpecGenerator {
    visual_config: VisualConfig,
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSpecGenerator {
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
        }
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    /// Anchor of a house number, or `None` outside 1..=12.
    pub fn house_anchor(&self, house: u8) -> Option<Point> {
        let base = HOUSE_ANCHORS.get(usize::from(house).checked_sub(1)?)?;
        let k = self.visual_config.size / BASE_SIZE;
        Some(Point::new(base.x * k, base.y * k))
    }

    pub fn generate(&self, placements: &[ZodiacPlacement]) -> ChartSpec {
        let cfg = &self.visual_config;
        let size = cfg.size;
        let mut spec = ChartSpec::new(size, size);
        spec.background_color = cfg.background_color;

        let thin = Stroke {
            color: cfg.stroke_color,
            width: cfg.stroke_width,
        };

        spec.shapes.push(Shape::Rect {
            origin: Point::new(0.0, 0.0),
            width: size,
            height: size,
            fill: Some(cfg.background_color),
            stroke: Some(thin.clone()),
        });
        spec.shapes.push(Shape::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(size, size),
            stroke: thin.clone(),
        });
        spec.shapes.push(Shape::Line {
            from: Point::new(size, 0.0),
            to: Point::new(0.0, size),
            stroke: thin,
        });
        let half = size / 2.0;
        spec.shapes.push(Shape::Polygon {
            points: vec![
                Point::new(half, 0.0),
                Point::new(size, half),
                Point::new(half, size),
                Point::new(0.0, half),
            ],
            fill: None,
            stroke: Some(Stroke {
                color: cfg.stroke_color,
                width: cfg.diamond_stroke_width,
            }),
        });

        for house in 1..=12u8 {
            let Some(anchor) = self.house_anchor(house) else {
                continue;
            };
            spec.shapes.push(Shape::Text {
                position: anchor,
                content: house.to_string(),
                size: cfg.house_number_size,
                color: cfg.house_number_color,
                anchor: TextAnchor::Middle,
            });

            let residents = placements.iter().filter(|p| p.house == house);
            for (slot, placement) in residents.enumerate() {
                spec.shapes.push(Shape::Text {
                    position: Point::new(
                        anchor.x,
                        anchor.y + cfg.label_offset + slot as f32 * cfg.label_spacing,
                    ),
                    content: planet_label(placement),
                    size: cfg.planet_label_size,
                    color: cfg.planet_color,
                    anchor: TextAnchor::Middle,
                });
            }
        }

        spec
    }
}

/// `"Su 24.5°"`: two-letter body abbreviation and degrees in sign.
pub fn planet_label(placement: &ZodiacPlacement) -> String {
    let abbrev: String = placement.body.name().chars().take(2).collect();
    format!("{} {}°", abbrev, placement.degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::CelestialBody;
    use crate::western::ZodiacPlacement;

    #[test]
    fn test_planet_label() {
        let p = ZodiacPlacement::from_right_ascension(CelestialBody::Mercury, 95.25);
        assert_eq!(planet_label(&p), "Me 5.25°");
    }

    #[test]
    fn test_house_anchor_scales() {
        let generator = ChartSpecGenerator::with_config(VisualConfig::with_size(1000.0));
        assert_eq!(generator.house_anchor(1), Some(Point::new(500.0, 200.0)));
        assert_eq!(generator.house_anchor(0), None);
        assert_eq!(generator.house_anchor(13), None);
    }
}

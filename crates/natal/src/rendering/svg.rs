use crate::rendering::primitives::{Color, Shape, Stroke};
use crate::rendering::spec::ChartSpec;
use std::fmt::Write;

fn paint(color: Option<Color>) -> String {
    color.map_or_else(|| "none".to_string(), |c| c.to_css_string())
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    match stroke {
        Some(s) => format!(
            r#" stroke="{}" stroke-width="{}""#,
            s.color.to_css_string(),
            s.width
        ),
        None => r#" stroke="none""#.to_string(),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Serialize a [`ChartSpec`] as a standalone SVG document.
pub fn to_svg(spec: &ChartSpec) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
        w = spec.width,
        h = spec.height
    );

    for shape in &spec.shapes {
        let _ = match shape {
            Shape::Rect {
                origin,
                width,
                height,
                fill,
                stroke,
            } => writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
                origin.x,
                origin.y,
                width,
                height,
                paint(*fill),
                stroke_attrs(stroke.as_ref())
            ),
            Shape::Line { from, to, stroke } => writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                stroke_attrs(Some(stroke))
            ),
            Shape::Polygon {
                points,
                fill,
                stroke,
            } => {
                let pts: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
                writeln!(
                    out,
                    r#"  <polygon points="{}" fill="{}"{}/>"#,
                    pts.join(" "),
                    paint(*fill),
                    stroke_attrs(stroke.as_ref())
                )
            }
            Shape::Text {
                position,
                content,
                size,
                color,
                anchor,
            } => writeln!(
                out,
                r#"  <text x="{}" y="{}" font-size="{}" text-anchor="{}" fill="{}">{}</text>"#,
                position.x,
                position.y,
                size,
                anchor.as_svg(),
                color.to_css_string(),
                escape(content)
            ),
        };
    }

    out.push_str("</svg>\n");
    out
}

//! SVG rendering of a chart scene
//!
//! Consumes only the serialized scene; no geometry is recomputed here.

use std::fmt::Write;

use crate::geometry::ChartScene;
use crate::geometry::path::num;

/// Presentation choices for the SVG document
#[derive(Debug, Clone)]
pub struct SvgStyle {
    /// Page background; `None` leaves the canvas transparent
    pub background: Option<String>,
    pub grid_stroke: String,
    pub label_fill: String,
    pub font_family: String,
    pub font_size: f32,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background: None,
            grid_stroke: "#888888".to_string(),
            label_fill: "#222222".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 13.0,
        }
    }
}

impl SvgStyle {
    /// Opaque, print-friendly style for image and document export
    pub fn print() -> Self {
        Self {
            background: Some("#FFFFFF".to_string()),
            label_fill: "#000000".to_string(),
            ..Self::default()
        }
    }
}

/// Escape text for XML content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a complete standalone SVG document
pub fn render_svg(scene: &ChartScene, style: &SvgStyle) -> String {
    let size = num(scene.canvas_size);
    let mut svg = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">"#
    );

    if let Some(background) = &style.background {
        let _ = writeln!(
            svg,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            escape_xml(background)
        );
    }

    if scene.slices.is_empty() {
        svg.push_str("</svg>\n");
        return svg;
    }

    svg.push_str("<defs>\n");
    for slice in &scene.slices {
        let color = escape_xml(slice.color.as_str());
        let _ = writeln!(
            svg,
            r#"<radialGradient id="grad-{}"><stop offset="20%" stop-color="{color}" stop-opacity="0.7"/><stop offset="95%" stop-color="{color}" stop-opacity="0.4"/></radialGradient>"#,
            slice.index
        );
    }
    svg.push_str("</defs>\n");

    let grid = escape_xml(&style.grid_stroke);
    svg.push_str(r#"<g opacity="0.5">"#);
    svg.push('\n');
    for circle in &scene.grid {
        let _ = writeln!(
            svg,
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{grid}" stroke-width="0.5" stroke-dasharray="2 4"/>"#,
            num(circle.center.x),
            num(circle.center.y),
            num(circle.radius)
        );
    }
    for line in &scene.dividers {
        let _ = writeln!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{grid}" stroke-width="0.5"/>"#,
            num(line.from.x),
            num(line.from.y),
            num(line.to.x),
            num(line.to.y)
        );
    }
    svg.push_str("</g>\n<g>\n");

    for slice in scene.slices.iter().filter(|s| !s.outline.path.is_empty()) {
        let _ = writeln!(
            svg,
            r#"<path d="{}" fill="url(#grad-{})" stroke="{}" stroke-width="1.5"/>"#,
            slice.outline.path.to_svg_data(),
            slice.index,
            escape_xml(slice.color.as_str())
        );
    }
    svg.push_str("</g>\n<g>\n");

    for label in &scene.labels {
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
            num(label.anchor.x),
            num(label.anchor.y),
            escape_xml(&style.font_family),
            num(style.font_size),
            escape_xml(&style.label_fill),
            escape_xml(&label.text)
        );
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

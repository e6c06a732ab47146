//! Shape generation for 2D chart primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::geometry::SliceSector;
use crate::polar_to_cartesian;

/// Segment bounds for one arc
const MIN_SEGMENTS: usize = 4;
const MAX_SEGMENTS: usize = 2048;

/// Number of segments for an arc spanning `span` radians
fn segment_count(span: f32, segments_per_radian: f32) -> usize {
    let wanted = span.abs() * segments_per_radian;
    if !wanted.is_finite() {
        return MIN_SEGMENTS;
    }
    (wanted as usize).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Generate vertices for a filled sector band around `center`
pub fn sector(
    center: Vec2,
    sector: &SliceSector,
    color: [f32; 4],
    segments_per_radian: f32,
) -> Vec<Vertex> {
    if sector.outer_radius <= sector.inner_radius {
        return Vec::new();
    }

    let span = sector.angular_span();
    let num_segments = segment_count(span, segments_per_radian);
    let mut vertices = Vec::with_capacity(num_segments * 6);

    for i in 0..num_segments {
        let theta1 = sector.start_angle + span * i as f32 / num_segments as f32;
        let theta2 = sector.start_angle + span * (i + 1) as f32 / num_segments as f32;

        let inner1 = center + polar_to_cartesian(sector.inner_radius, theta1);
        let outer1 = center + polar_to_cartesian(sector.outer_radius, theta1);
        let inner2 = center + polar_to_cartesian(sector.inner_radius, theta2);
        let outer2 = center + polar_to_cartesian(sector.outer_radius, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for a thin full ring of the given radius
pub fn ring(
    center: Vec2,
    radius: f32,
    width: f32,
    color: [f32; 4],
    segments_per_radian: f32,
) -> Vec<Vertex> {
    let half = width / 2.0;
    let band = SliceSector::new(
        (radius - half).max(0.0),
        radius + half,
        0.0,
        std::f32::consts::TAU,
    );
    sector(center, &band, color, segments_per_radian)
}

/// Generate vertices for a straight line of the given width
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_sector_stays_inside_radius() {
        let center = Vec2::new(300.0, 300.0);
        let wedge = SliceSector::wedge(120.0, -FRAC_PI_2, 0.0);
        let vertices = sector(center, &wedge, WHITE, 24.0);
        assert_eq!(vertices.len() % 3, 0);
        assert!(!vertices.is_empty());
        for v in &vertices {
            let p = Vec2::from(v.position) - center;
            assert!(p.length() <= 120.0 + 1e-3);
            // Top-right quarter only
            assert!(p.x >= -1e-3 && p.y <= 1e-3);
        }
    }

    #[test]
    fn test_degenerate_shapes_are_empty() {
        let wedge = SliceSector::wedge(0.0, 0.0, 1.0);
        assert!(sector(Vec2::ZERO, &wedge, WHITE, 24.0).is_empty());
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, WHITE).is_empty());
    }

    #[test]
    fn test_line_quad() {
        let vertices = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, WHITE);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [0.0, 1.0]);
        assert_eq!(vertices[5].position, [10.0, -1.0]);
    }

    #[test]
    fn test_segment_count_is_bounded() {
        assert_eq!(segment_count(0.1, 1.0), MIN_SEGMENTS);
        assert_eq!(segment_count(std::f32::consts::TAU, 1e9), MAX_SEGMENTS);
        assert_eq!(segment_count(1.0, f32::INFINITY), MIN_SEGMENTS);
        assert_eq!(segment_count(1.0, f32::NAN), MIN_SEGMENTS);

        let wedge = SliceSector::wedge(100.0, 0.0, std::f32::consts::TAU);
        assert_eq!(sector(Vec2::ZERO, &wedge, WHITE, 1e9).len(), MAX_SEGMENTS * 6);
    }

    #[test]
    fn test_ring_width() {
        let vertices = ring(Vec2::ZERO, 50.0, 2.0, WHITE, 8.0);
        for v in &vertices {
            let r = Vec2::from(v.position).length();
            assert!((49.0 - 1e-3..=51.0 + 1e-3).contains(&r));
        }
    }
}
